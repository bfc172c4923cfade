use anyhow::{ensure, Result};
use clap::{Arg, ArgMatches, Command};
use log::{info, LevelFilter};
use rand::Rng;

use matcalc_core::{DisplayOptions, Matrix};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATCALC_LOG", "error,matcalc=info"))
        .init();

    let matches = Command::new("matcalc")
        .version(clap::crate_version!())
        .about("Dense matrix calculator - demonstrations and self-tests for matcalc-core")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the matrix arithmetic demonstration")
                .arg(
                    Arg::new("max_rows")
                        .long("max-rows")
                        .value_parser(clap::value_parser!(usize))
                        .help("Rows to print before truncating the matrix view"),
                )
                .arg(
                    Arg::new("max_cols")
                        .long("max-cols")
                        .value_parser(clap::value_parser!(usize))
                        .help("Columns to print per row before truncating the matrix view"),
                )
                .arg(
                    Arg::new("precision")
                        .long("precision")
                        .value_parser(clap::value_parser!(usize))
                        .help("Decimal places used when printing elements"),
                ),
        )
        .subcommand(
            Command::new("selftest")
                .about("Run assertion-based self-checks; exits non-zero on the first failure"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_matches)) => run_demo(sub_matches),
        Some(("selftest", _)) => run_selftest(),
        _ => unreachable!(),
    }
}

fn display_options(matches: &ArgMatches) -> DisplayOptions {
    let mut opts = DisplayOptions::default();
    if let Some(&max_rows) = matches.get_one::<usize>("max_rows") {
        opts.max_rows = max_rows;
    }
    if let Some(&max_cols) = matches.get_one::<usize>("max_cols") {
        opts.max_cols = max_cols;
    }
    if let Some(&precision) = matches.get_one::<usize>("precision") {
        opts.precision = precision;
    }
    opts
}

fn run_demo(matches: &ArgMatches) -> Result<()> {
    let opts = display_options(matches);

    let a = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
    let b = Matrix::from_flat(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 2, 3)?;

    println!("Matrix A:");
    print!("{}", a.format_with(&opts));
    println!("Matrix B:");
    print!("{}", b.format_with(&opts));

    println!("A + B:");
    let sum = a.add(&b)?;
    print!("{}", sum.format_with(&opts));

    println!("A * B^T:");
    let product = a.multiply(&b.transpose())?;
    print!("{}", product.format_with(&opts));

    println!("average(A) = {}", a.average()?);
    println!("average(B) = {}", b.average()?);

    let mut rng = rand::thread_rng();
    let noise: Vec<f64> = (0..12 * 16).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let big = Matrix::from_flat(&noise, 12, 16)?;
    println!("Random 12x16 matrix:");
    print!("{}", big.format_with(&opts));
    println!("average = {:.4}", big.average()?);

    Ok(())
}

fn run_selftest() -> Result<()> {
    info!("running matrix self-tests");

    // Construction and zero initialization
    let m = Matrix::new(2, 3)?;
    ensure!(m.shape() == (2, 3), "create: wrong shape");
    ensure!(
        m.as_slice().iter().all(|&v| v == 0.0),
        "create: not zero-initialized"
    );
    ensure!(Matrix::new(0, 5).is_err(), "create: accepted zero rows");
    ensure!(Matrix::new(5, 0).is_err(), "create: accepted zero columns");

    // Addition
    let a = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0], 2, 2)?;
    let b = Matrix::from_flat(&[5.0, 6.0, 7.0, 8.0], 2, 2)?;
    let sum = a.add(&b)?;
    ensure!(sum.as_slice() == [6.0, 8.0, 10.0, 12.0], "add: wrong result");
    let c = Matrix::new(2, 3)?;
    let d = Matrix::new(3, 2)?;
    ensure!(c.add(&d).is_err(), "add: accepted mismatched shapes");

    // Multiplication
    let a = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
    let b = Matrix::from_flat(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2)?;
    let product = a.multiply(&b)?;
    ensure!(
        product.as_slice() == [58.0, 64.0, 139.0, 154.0],
        "multiply: wrong result"
    );
    ensure!(
        a.multiply(&a).is_err(),
        "multiply: accepted incompatible shapes"
    );

    // Transpose
    let t = a.transpose();
    ensure!(t.shape() == (3, 2), "transpose: wrong shape");
    ensure!(
        t[(0, 1)] == 4.0 && t[(2, 0)] == 3.0,
        "transpose: wrong result"
    );

    // From flat array
    let m = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
    ensure!(m.row_slice(1) == [4.0, 5.0, 6.0], "from_flat: wrong unpacking");
    ensure!(
        Matrix::from_flat(&[1.0, 2.0], 2, 3).is_err(),
        "from_flat: accepted short buffer"
    );

    // Average
    ensure!((a.average()? - 3.5).abs() < 1e-9, "average: wrong value");
    ensure!(
        Matrix::empty().average().is_err(),
        "average: accepted empty matrix"
    );

    // Release
    let mut m = Matrix::new(4, 4)?;
    m.release();
    ensure!(m.is_empty(), "release: matrix still live");
    m.release(); // no-op on the sentinel

    info!("all self-tests passed");
    println!("matcalc self-test: OK");
    Ok(())
}
