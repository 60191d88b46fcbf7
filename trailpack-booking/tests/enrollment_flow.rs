//! End-to-end walk through the Himalayan demo package: two destinations,
//! five activities, five passengers across all three tiers.

use trailpack_booking::{PackageManager, Passenger, PassengerRegistry};
use trailpack_catalog::{Destination, Itinerary};
use trailpack_shared::{PassengerNumber, PassengerTier};
use uuid::Uuid;

struct Demo {
    manager: PackageManager,
    registry: PassengerRegistry,
    package_id: Uuid,
    brahmatal: Uuid,
    camping: Uuid,
    trek: Uuid,
    harshil: Uuid,
    temple: Uuid,
    dharali: Uuid,
    pokhari: Uuid,
}

fn build_demo() -> Demo {
    let mut brahmatal = Destination::new("Brahmatal");
    let camping = brahmatal
        .add_activity(
            "Camping",
            "Overnight stays with a basic temporary shelter",
            1000.0,
            20,
        )
        .unwrap();
    let trek = brahmatal
        .add_activity("Brahmatal Trek", "Hiking in the mountains", 1500.0, 15)
        .unwrap();

    let mut harshil = Destination::new("Harshil Valley");
    let temple = harshil
        .add_activity(
            "Gangotri Temple",
            "The highest temple dedicated to Goddess Ganga",
            1000.0,
            35,
        )
        .unwrap();
    let dharali = harshil
        .add_activity(
            "Dharali Village",
            "A picturesque hamlet on the banks of the Ganges",
            500.0,
            35,
        )
        .unwrap();
    let pokhari = harshil
        .add_activity(
            "Pokhari Bugyal Trek",
            "A 6 km gradual ascend through Rhododendrons",
            3000.0,
            15,
        )
        .unwrap();

    let brahmatal_id = brahmatal.id;
    let harshil_id = harshil.id;

    let mut manager = PackageManager::new();
    let package_id = manager.create_package(
        "Himalayan Explorers' Club",
        100,
        Itinerary::new(vec![brahmatal, harshil]),
    );

    let mut registry = PassengerRegistry::new();
    for (name, number, tier, balance) in [
        ("Rahul", 1, PassengerTier::Standard, 10000.0),
        ("Radhika", 2, PassengerTier::Standard, 15000.0),
        ("Sakshi", 5, PassengerTier::Gold, 25000.0),
        ("Aman", 6, PassengerTier::Gold, 20000.0),
        ("Tanya", 7, PassengerTier::Premium, 30000.0),
    ] {
        registry
            .register(Passenger::new(name, PassengerNumber(number), tier, balance))
            .unwrap();
    }

    Demo {
        manager,
        registry,
        package_id,
        brahmatal: brahmatal_id,
        camping,
        trek,
        harshil: harshil_id,
        temple,
        dharali,
        pokhari,
    }
}

fn run_demo_enrollments(demo: &mut Demo) {
    let package = demo.manager.get_mut(&demo.package_id).unwrap();
    let bookings = [
        (1, demo.camping, demo.brahmatal),
        (1, demo.trek, demo.brahmatal),
        (1, demo.temple, demo.harshil),
        (2, demo.camping, demo.brahmatal),
        (2, demo.pokhari, demo.harshil),
        (5, demo.camping, demo.brahmatal),
        (5, demo.camping, demo.brahmatal), // duplicate booking, seat no-ops
        (6, demo.temple, demo.harshil),
        (6, demo.dharali, demo.harshil),
        (7, demo.camping, demo.brahmatal),
        (7, demo.dharali, demo.harshil),
    ];
    for (number, activity, destination) in bookings {
        package
            .enroll_passenger(
                &mut demo.registry,
                PassengerNumber(number),
                activity,
                destination,
            )
            .unwrap();
    }
}

#[test]
fn test_demo_balances_after_all_enrollments() {
    let mut demo = build_demo();
    run_demo_enrollments(&mut demo);

    let balance = |n: u32| demo.registry.get(PassengerNumber(n)).unwrap().balance;
    // Standard pays list price.
    assert_eq!(balance(1), 10000.0 - 1000.0 - 1500.0 - 1000.0);
    assert_eq!(balance(2), 15000.0 - 1000.0 - 3000.0);
    // Gold pays 90%; Sakshi is debited twice for the duplicate booking.
    assert_eq!(balance(5), 25000.0 - 900.0 - 900.0);
    assert_eq!(balance(6), 20000.0 - 900.0 - 450.0);
    // Premium rides free.
    assert_eq!(balance(7), 30000.0);
}

#[test]
fn test_demo_rosters_and_histories() {
    let mut demo = build_demo();
    run_demo_enrollments(&mut demo);

    let package = demo.manager.get(&demo.package_id).unwrap();
    assert_eq!(package.enrolled().len(), 5);

    // Sakshi's duplicate booking left two history records but one seat.
    let sakshi = demo.registry.get(PassengerNumber(5)).unwrap();
    assert_eq!(sakshi.enrollments().len(), 2);
    let camping = package
        .itinerary()
        .activity(demo.brahmatal, demo.camping)
        .unwrap();
    assert!(camping.is_enrolled(PassengerNumber(5)));
    assert_eq!(camping.enrolled().len(), 4);
    assert_eq!(camping.seats_remaining(), 16);
}

#[test]
fn test_demo_reports() {
    let mut demo = build_demo();
    run_demo_enrollments(&mut demo);

    let package = demo.manager.get(&demo.package_id).unwrap();

    let itinerary = package.itinerary_summary();
    assert_eq!(itinerary.package, "Himalayan Explorers' Club");
    assert_eq!(itinerary.destinations.len(), 2);
    assert_eq!(itinerary.destinations[0].name, "Brahmatal");
    assert_eq!(itinerary.destinations[1].activities.len(), 3);

    let list = package.passenger_list(&demo.registry);
    assert_eq!(list.enrolled_count, 5);
    let names: Vec<&str> = list.passengers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Rahul", "Radhika", "Sakshi", "Aman", "Tanya"]);

    let tanya = package
        .passenger_details(&demo.registry, PassengerNumber(7))
        .unwrap();
    assert_eq!(tanya.tier, PassengerTier::Premium);
    assert_eq!(tanya.enrollments.len(), 2);
    assert!(tanya.enrollments.iter().all(|e| e.charged_price == 0.0));

    // A registered but never-enrolled passenger is a lookup miss.
    demo.registry
        .register(Passenger::new(
            "Vikram",
            PassengerNumber(9),
            PassengerTier::Standard,
            5000.0,
        ))
        .unwrap();
    assert!(package
        .passenger_details(&demo.registry, PassengerNumber(9))
        .is_err());
}
