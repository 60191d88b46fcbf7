mod app_config;

use anyhow::Context;
use app_config::Config;
use trailpack_booking::{PackageManager, Passenger, PassengerRegistry, TravelPackage};
use trailpack_catalog::{Destination, Itinerary};
use trailpack_shared::{PassengerNumber, PassengerTier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trailpack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(
        "Starting trailpack demo for package '{}'",
        config.package.name
    );

    let mut brahmatal = Destination::new("Brahmatal");
    let camping = brahmatal.add_activity(
        "Camping",
        "Overnight stays with a basic temporary shelter",
        1000.0,
        20,
    )?;
    let trek = brahmatal.add_activity("Brahmatal Trek", "Hiking in the mountains", 1500.0, 15)?;

    let mut harshil = Destination::new("Harshil Valley");
    let temple = harshil.add_activity(
        "Gangotri Temple",
        "Located at an altitude of 3,100mts, the highest temple dedicated to Goddess Ganga",
        1000.0,
        35,
    )?;
    let dharali = harshil.add_activity(
        "Dharali Village",
        "A picturesque hamlet nestled on the tranquil banks of river Ganges",
        500.0,
        35,
    )?;
    let pokhari = harshil.add_activity(
        "Pokhari Bugyal Trek",
        "This 6 kms long trek is a gradual ascend landscaped beautifully with Rhododendrons",
        3000.0,
        15,
    )?;

    let brahmatal_id = brahmatal.id;
    let harshil_id = harshil.id;

    let mut manager = PackageManager::new();
    let package_id = manager.create_package_with_policy(
        config.package.name.clone(),
        config.package.passenger_capacity,
        Itinerary::new(vec![brahmatal, harshil]),
        config.pricing.to_policy()?,
    );

    let mut registry = PassengerRegistry::new();
    for (name, number, tier, balance) in [
        ("Rahul", 1, PassengerTier::Standard, 10000.0),
        ("Radhika", 2, PassengerTier::Standard, 15000.0),
        ("Sakshi", 5, PassengerTier::Gold, 25000.0),
        ("Aman", 6, PassengerTier::Gold, 20000.0),
        ("Tanya", 7, PassengerTier::Premium, 30000.0),
    ] {
        registry.register(Passenger::new(name, PassengerNumber(number), tier, balance))?;
    }

    let bookings: [(u32, Uuid, Uuid); 11] = [
        (1, camping, brahmatal_id),
        (1, trek, brahmatal_id),
        (1, temple, harshil_id),
        (2, camping, brahmatal_id),
        (2, pokhari, harshil_id),
        (5, camping, brahmatal_id),
        (5, camping, brahmatal_id),
        (6, temple, harshil_id),
        (6, dharali, harshil_id),
        (7, camping, brahmatal_id),
        (7, dharali, harshil_id),
    ];

    let package = manager
        .get_mut(&package_id)
        .context("demo package vanished from the manager")?;
    for (number, activity, destination) in bookings {
        if let Err(e) =
            package.enroll_passenger(&mut registry, PassengerNumber(number), activity, destination)
        {
            tracing::warn!("Enrollment rejected for passenger {}: {}", number, e);
        }
    }

    let package = manager
        .get(&package_id)
        .context("demo package vanished from the manager")?;
    print_itinerary(package);
    print_passenger_list(package, &registry);
    for number in [1, 6, 7] {
        print_passenger_details(package, &registry, PassengerNumber(number));
    }

    Ok(())
}

fn print_itinerary(package: &TravelPackage) {
    let summary = package.itinerary_summary();
    println!("Travel Package: {}", summary.package);
    for destination in &summary.destinations {
        println!("Destination: {}", destination.name);
        for activity in &destination.activities {
            println!("  Activity: {}", activity.name);
            println!("    Description: {}", activity.description);
            println!("    Cost: {}", activity.cost);
            println!(
                "    Capacity: {} ({} seats remaining)",
                activity.capacity, activity.seats_remaining
            );
        }
    }
}

fn print_passenger_list(package: &TravelPackage, registry: &PassengerRegistry) {
    let list = package.passenger_list(registry);
    println!("Travel Package: {}", list.package);
    println!("Passenger Capacity: {}", list.passenger_capacity);
    println!("Number of Passengers Enrolled: {}", list.enrolled_count);
    for passenger in &list.passengers {
        println!("  Name: {} (#{})", passenger.name, passenger.number);
    }
}

fn print_passenger_details(
    package: &TravelPackage,
    registry: &PassengerRegistry,
    number: PassengerNumber,
) {
    match package.passenger_details(registry, number) {
        Ok(details) => {
            println!("Passenger Details:");
            println!("  Name: {}", details.name);
            println!("  Passenger Number: {}", details.number);
            println!("  Tier: {}", details.tier);
            println!("  Balance: {}", details.balance);
            if !details.enrollments.is_empty() {
                println!("  Enrollments:");
                for e in &details.enrollments {
                    println!(
                        "    Activity: {}, Destination: {}, Price: {}, Tier: {}",
                        e.activity, e.destination, e.charged_price, e.tier_at_booking
                    );
                }
            }
        }
        Err(e) => println!("{}", e),
    }
}
