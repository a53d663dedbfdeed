//! Showcase entry point.
//!
//! Prints every traversal of a configured integer container, demonstrates
//! removal of a present and an absent value, then repeats the listing for
//! string and floating-point containers.

use multiorder::prelude::*;
use showcase::ShowcaseConfig;
use showcase::report::{render_orders, render_orders_by};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_section<T: std::fmt::Display>(title: &str, container: &Container<T>, lines: &[String]) {
    println!("\n===== {title} =====");
    println!("contents: {container} (size {})", container.size());
    for line in lines {
        println!("  {line}");
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,multiorder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ShowcaseConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: values={:?}, remove={}, missing={}",
                config.values,
                config.remove,
                config.missing
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            ShowcaseConfig::default()
        }
    };

    let mut integers: Container = config.values.iter().copied().collect();
    print_section("Integer Container", &integers, &render_orders(&integers));

    match integers.remove(&config.remove) {
        Ok(removed) => println!("\nremoved {} ({removed} occurrence(s))", config.remove),
        Err(error) => println!("\nremove {} failed: {error}", config.remove),
    }
    if let Err(error) = integers.remove(&config.missing) {
        println!("remove {} failed: {error}", config.missing);
    }
    print_section("After Removal", &integers, &render_orders(&integers));

    match serde_json::to_string(&integers) {
        Ok(json) => println!("  json: {json}"),
        Err(error) => tracing::warn!("Failed to serialize container: {error}"),
    }

    let words: Container<String> = ["banana", "apple", "cherry"]
        .into_iter()
        .map(String::from)
        .collect();
    print_section("String Container", &words, &render_orders(&words));

    let mut doubles: Container<f64> = [8.8, 1.1, 4.4, 9.9, 6.6].into_iter().collect();
    print_section(
        "Double Container",
        &doubles,
        &render_orders_by(&doubles, f64::total_cmp),
    );
    if let Err(error) = doubles.remove(&7.7) {
        println!("remove 7.7 failed: {error}");
    }
    if doubles.remove(&4.4).is_ok() {
        println!("after removing 4.4: {doubles}");
    }

    let empty: Container = Container::new();
    print_section("Empty Container", &empty, &render_orders(&empty));
}
