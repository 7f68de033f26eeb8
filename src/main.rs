use anyhow::Result;
use argh::FromArgs;
use random_draw::sample::Sample;
use serde_json::json;

#[derive(FromArgs, Debug)]
/// Draw cryptographically random integers from an inclusive range
struct Args {
    /// inclusive lower bound
    #[argh(option, default = "1")]
    min: i64,

    /// inclusive upper bound
    #[argh(option, default = "10")]
    max: i64,

    /// how many values to draw
    #[argh(option, short = 'n')]
    count: Option<usize>,

    /// alias for --count
    #[argh(option)]
    number: Option<usize>,

    /// print summary statistics instead of the raw values
    #[argh(switch, short = 's')]
    stats: bool,

    /// print the sample and its statistics as JSON
    #[argh(switch)]
    json: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let count = args.count.or(args.number).unwrap_or(1);

    let sample = Sample::draw(count, args.min, args.max)?;
    if args.json {
        print_json(&sample)?;
    } else if args.stats {
        print_stats(&sample);
    } else {
        let values = sample
            .values()
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>();
        println!("{}", values.join(" "));
    }

    Ok(())
}

fn print_stats(sample: &Sample) {
    println!("mean:                {:.2}", sample.mean());
    println!("population variance: {:.2}", sample.population_variance());
    println!("population std dev:  {:.2}", sample.population_std_dev());
    println!("uniform std dev:     {:.2}", sample.uniform_std_dev());
    println!("median:              {:.2}", sample.median());
    println!("frequencies:");
    let percentages = sample.frequency_percentages();
    for (value, count) in sample.frequencies() {
        println!("{:>12}  {:>6}  {:>6.2}%", value, count, percentages[value]);
    }
}

fn print_json(sample: &Sample) -> Result<()> {
    let report = json!({
        "lower_bound": sample.lower_bound(),
        "upper_bound": sample.upper_bound(),
        "count": sample.count(),
        "values": sample.values(),
        "stats": sample.stats(),
        "uniform_std_dev": sample.uniform_std_dev(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
