//! Headless evaluator: prints base and meta-learner predictions for one sample.
//!
//! Usage: `stacking-eval <sample> [w0 w1 w2]`

use stacking_demo::stacking::{BASE_MODELS, WeightVector, evaluate};

const USAGE: &str = "Usage: stacking-eval <sample> [w0 w1 w2]";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug)]
struct Args {
    sample: f64,
    weights: WeightVector,
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    let outcome = evaluate(args.sample, args.weights);
    println!("Sample: {:.10}", args.sample);
    for ((model, prediction), weight) in BASE_MODELS
        .iter()
        .zip(outcome.base.0.iter())
        .zip(args.weights.0.iter())
    {
        println!("{}: {prediction:.10} (weight {weight})", model.name);
    }
    let meta = outcome.meta.map_err(|err| err.to_string())?;
    println!("Meta-learner: {meta:.10}");
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Args, String> {
    let values = args
        .iter()
        .map(|arg| match arg.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("Not a finite number: {arg}\n{USAGE}")),
            Err(_) => Err(format!("Not a number: {arg}\n{USAGE}")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [sample] => Ok(Args {
            sample: *sample,
            weights: WeightVector::uniform(),
        }),
        [sample, w0, w1, w2] => Ok(Args {
            sample: *sample,
            weights: WeightVector::new(*w0, *w1, *w2),
        }),
        _ => Err(USAGE.to_string()),
    }
}
