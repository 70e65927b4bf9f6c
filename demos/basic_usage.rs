// ============================================================================
// Basic Usage Example
// ============================================================================

use fraction_calc::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fraction Calculator Example ===\n");

    // Plain arithmetic on mixed numbers
    let a = Fraction::new(Sign::Positive, 1, 1, 2);
    let b = Fraction::new(Sign::Positive, 2, 1, 3);
    for op in Operator::ALL {
        match perform_operation(&a, op, &b) {
            Ok(result) => println!("{} {} {} = {}", a, op.symbol(), b, result),
            Err(e) => println!("{} {} {} failed: {}", a, op.symbol(), b, e),
        }
    }

    // Rounding onto ruler graduations
    println!("\nRounding 1/3:");
    let third = Fraction::from_parts(1, 3);
    for den in [2u32, 4, 8, 16, 32] {
        let up = ceil_fraction(&third, den).map(|f| f.to_string());
        let nearest = round_fraction(&third, den).map(|f| f.to_string());
        let down = floor_fraction(&third, den).map(|f| f.to_string());
        println!(
            "  x/{:<3} up: {:<6} nearest: {:<6} down: {}",
            den,
            up.unwrap_or_default(),
            nearest.unwrap_or_default(),
            down.unwrap_or_default()
        );
    }

    // A tape-measure session: 5 3/8 ÷ 3
    println!("\n=== Carpenter Session ===");
    let mut calc = match CalculatorBuilder::carpenter_preset().build(Arc::new(LoggingEventHandler)) {
        Ok(calc) => calc,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        },
    };

    let keys = [
        Action::Input { field: Field::Whole, value: 5 },
        Action::Input { field: Field::Numerator, value: 3 },
        Action::Input { field: Field::Denominator, value: 8 },
        Action::Operation(Operator::Divide),
        Action::Input { field: Field::Whole, value: 3 },
        Action::Equals,
    ];
    for key in keys {
        calc.dispatch(key);
        println!("  {:<60} display: {}", format!("{:?}", key), calc.display_value());
    }

    if let Some(exact) = calc.state().result {
        println!("\nExact result:   {} ({:.4})", exact, to_decimal(&exact));
    }
    println!("Rounded result: {}", calc.display_value());
}
