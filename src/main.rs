use anyhow::Result;
use serde_json::json;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use typed_utils::{
    area, count_occurrences, dedupe, get_json_property, get_property, has_all_keys, sum,
    update_profile, Car, DemoConfig, Person, Profile, ProfilePatch, Shape,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            DemoConfig::from_file(path)?
        }
        None => DemoConfig::default(),
    };
    debug!(?config, "Running samples");

    run_samples(&config)
}

fn run_samples(config: &DemoConfig) -> Result<()> {
    println!("🧮 Typed Utilities v{}", typed_utils::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n➕ sum([1, 2, 3, 4, 5]) = {}", sum(&[1.0, 2.0, 3.0, 4.0, 5.0]));

    println!("\n🔍 dedupe([1, 2, 2, 3, 4, 4, 5]) = {:?}", dedupe(&[1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0]));

    let sentence = "I love typescript";
    println!(
        "\n🔤 count({:?}, \"typescript\", {}) = {}",
        sentence,
        config.word_policy.as_str(),
        count_occurrences(sentence, "typescript", config.word_policy)
    );

    println!("\n📐 circle(r=5) area = {}", area(&Shape::circle(5.0)));
    println!("📐 rectangle(4x6) area = {}", area(&Shape::rectangle(4.0, 6.0)));

    let person = Person::new("Alice", 30);
    println!("\n🔑 person.name = {}", get_property(&person, Person::NAME));
    println!("🔑 person.age = {}", get_property(&person, Person::AGE));

    let profile = Profile::new("Alice", 25, "alice@example.com");
    let updated = update_profile(&profile, &ProfilePatch::new().with_age(26));
    println!("\n👤 updated profile = {}", serde_json::to_string(&updated)?);

    let clock = config.clock();
    for car in [Car::new("Honda", "Civic", 2018), Car::new("Toyota", "CVR", 2022)] {
        println!("🚗 {} is {} years old", car.label(), car.age(clock.as_ref()));
    }

    let record = json!({"name": "Alice", "age": 25, "email": "alice@example.com"});
    println!("\n✅ has [name, age] = {}", has_all_keys(&record, &["name", "age"]));
    println!("✅ has [name, age, address] = {}", has_all_keys(&record, &["name", "age", "address"]));

    if let Err(e) = get_json_property(&record, "address") {
        println!("❌ {}", e);
    }

    Ok(())
}
