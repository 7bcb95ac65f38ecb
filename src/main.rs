// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use wee_site::{build_roster, photos_dir, AssetIndex};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "scan" {
        // One-shot index/roster summary
        run_scan()?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_scan() -> Result<()> {
    println!("📁 Asset Scan - Photos → Roster");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let root = photos_dir();

    // 1. Scan photo root
    println!("\n📂 Scanning {:?}...", root);
    let index = AssetIndex::scan(&root)?;
    println!("✓ Indexed {} images", index.image_count());
    println!("✓ Found {} event photos", index.event_images().len());

    // 2. Build roster
    println!("\n🧑‍🤝‍🧑 Building roster...");
    let roster = build_roster(&index);
    println!("✓ Resolved {} year groups", roster.len());

    for group in &roster {
        let with_photo = group
            .members
            .iter()
            .filter(|m| m.image_src.is_some())
            .count();
        println!(
            "   {} — {} members ({} with photos)",
            group.display_year,
            group.members.len(),
            with_photo
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Scan complete");

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading site preview...\n");

    let root = photos_dir();
    println!("📂 Scanning {:?}...", root);
    let index = AssetIndex::scan(&root)?;
    let roster = build_roster(&index);

    println!(
        "✓ {} images, {} roster years\n",
        index.image_count(),
        roster.len()
    );
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(index, roster);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web server: cargo run --bin wee-server --features server");
    std::process::exit(1);
}
