// ============================================================================
// Basic Usage Example
// ============================================================================

use money::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Money Example ===\n");

    let rent = Money::with_default_currency(12_000);
    let food = Money::new(Decimal::new(4_250_75, 2), DEFAULT_CURRENCY);
    println!("Rent:  {}", rent);
    println!("Food:  {}", food);

    let total = (&rent + &food)?;
    println!("Total: {}", total);
    println!("Plain: {}", total.format(&FormatConfig::plain())?);

    // Mixing currencies is rejected
    println!("\n=== Mixed Currencies ===");
    let dollars = Money::new(100, "USD");
    match &total + &dollars {
        Ok(sum) => println!("Unexpected sum: {}", sum),
        Err(err) => println!("Rejected: {}", err),
    }

    // Sorted by currency first, then amount
    println!("\n=== Sorted Wallet ===");
    let mut wallet = vec![
        dollars,
        total,
        Money::new(101, "AUD"),
        Money::from_f64(0.5, "USD")?,
    ];
    wallet.sort();
    for m in &wallet {
        println!("  {}", m);
    }

    let parsed: Money = "1,100 Baht".parse()?;
    println!("\nParsed: {:?}", parsed);

    Ok(())
}
