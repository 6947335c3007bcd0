// ============================================================================
// Basic Usage Example
// Linear algebra refresher exercises on exact-decimal vectors
// ============================================================================

use decimal_vector::prelude::*;

fn v(coords: &[&str]) -> VectorResult<Vector> {
    Vector::new(coords.iter().copied())
}

fn main() -> VectorResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Vector Example ===\n");

    println!("Arithmetic");
    println!(
        "  add:       {}",
        v(&["8.218", "-9.341"])?.add(&v(&["-1.129", "2.111"])?)?
    );
    println!(
        "  subtract:  {}",
        v(&["7.119", "8.215"])?.subtract(&v(&["-8.223", "0.878"])?)?
    );
    println!(
        "  scale:     {}",
        v(&["1.671", "-1.012", "-0.318"])?.scalar_multiply("7.41")?
    );

    println!("\nMagnitude and direction");
    println!("  |v6|:      {}", v(&["-0.221", "7.437"])?.magnitude()?.round_dp(8));
    println!(
        "  |v7|:      {}",
        v(&["8.813", "-1.331", "-6.247"])?.magnitude()?.round_dp(8)
    );
    println!("  unit v8:   {}", v(&["5.581", "-2.136"])?.normalize()?);
    println!("  unit v9:   {}", v(&["1.996", "3.108", "-4.554"])?.normalize()?);

    println!("\nDot products and angles");
    println!(
        "  v10.v11:   {}",
        v(&["7.887", "4.138"])?.dot_product(&v(&["-8.802", "6.776"])?)?
    );
    println!(
        "  v12.v13:   {}",
        v(&["-5.955", "-4.904", "-1.874"])?.dot_product(&v(&["-4.496", "-8.755", "7.103"])?)?
    );
    println!(
        "  angle rad: {:.6}",
        v(&["3.183", "-7.627"])?.get_angle(&v(&["-2.668", "5.319"])?, false)?
    );
    println!(
        "  angle deg: {:.6}",
        v(&["7.35", "0.221", "5.188"])?.get_angle(&v(&["2.751", "8.259", "3.985"])?, true)?
    );

    println!("\nParallel / orthogonal");
    let pairs = [
        (v(&["-7.579", "-7.88"])?, v(&["22.737", "23.64"])?),
        (v(&["-2.029", "9.97", "4.172"])?, v(&["-9.231", "-6.639", "-7.245"])?),
        (v(&["-2.328", "-7.284", "-1.214"])?, v(&["-1.821", "1.072", "-2.94"])?),
        (v(&["2.118", "4.827"])?, v(&["0", "0"])?),
    ];
    for (a, b) in &pairs {
        println!(
            "  parallel={:<5} orthogonal={:<5} {} / {}",
            a.is_parallel(b)?,
            a.is_orthogonal(b)?,
            a,
            b
        );
    }

    println!("\nProjections");
    println!(
        "  parallel:   {}",
        v(&["3.039", "1.879"])?.get_parallel_projection(&v(&["0.825", "2.036"])?)?
    );
    println!(
        "  orthogonal: {}",
        v(&["-9.88", "-3.264", "-8.159"])?
            .get_orthogonal_projection(&v(&["-2.155", "-9.353", "-9.473"])?)?
    );
    let (parallel, orthogonal) = v(&["3.009", "-6.172", "3.692", "-2.51"])?
        .decompose(&v(&["6.404", "-9.144", "2.759", "8.718"])?)?;
    println!("  4D parallel:   {}", parallel);
    println!("  4D orthogonal: {}", orthogonal);

    println!("\nCross products and areas");
    println!(
        "  cross:         {}",
        v(&["8.462", "7.893", "-8.187"])?.cross_product(&v(&["6.984", "-5.975", "4.778"])?)?
    );
    println!(
        "  parallelogram: {}",
        v(&["-8.987", "-9.838", "5.031"])?
            .get_parallelogram_area(&v(&["-4.268", "-1.861", "-8.866"])?)?
            .round_dp(8)
    );
    println!(
        "  triangle:      {}",
        v(&["1.5", "9.547", "3.691"])?
            .get_triangle_area(&v(&["-6.007", "0.124", "5.772"])?)?
            .round_dp(8)
    );

    match v(&["1", "2"])?.cross_product(&v(&["3", "4"])?) {
        Ok(cross) => println!("  unexpected:    {}", cross),
        Err(err) => println!("  2D cross:      {}", err),
    }

    Ok(())
}
