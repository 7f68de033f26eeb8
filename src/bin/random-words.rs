use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use random_draw::wordlist::{self, WordSource};

#[derive(FromArgs, Debug)]
/// Select random words from a wordlist file
struct Args {
    /// path to the wordlist file
    #[argh(option, short = 'i', default = "PathBuf::from(\"./wordlist.txt\")")]
    input: PathBuf,

    /// path the selected words are written to
    #[argh(option, short = 'o', default = "PathBuf::from(\"./random.txt\")")]
    output: PathBuf,

    /// how many words to select
    #[argh(option, short = 'n', default = "5")]
    count: usize,

    /// overwrite the output file without asking
    #[argh(switch, short = 'f')]
    force: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    if args.count < 1 {
        bail!("cannot select fewer than one word");
    }
    if args.output.exists() && !args.force && !confirm_overwrite(&args.output)? {
        bail!(
            "not replacing {}, re-run with a new output path",
            args.output.display()
        );
    }

    let words = wordlist::read_words(WordSource::Path(args.input.clone()))?;
    if words.is_empty() {
        bail!("the wordlist is empty after cleaning");
    }

    let selected = wordlist::choose(&words, args.count)?;
    let line = selected.join(" ");
    println!("{}", line);
    fs::write(&args.output, format!("{}\n", line))
        .with_context(|| format!("unable to write {}", args.output.display()))?;

    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    let stdin = io::stdin();
    loop {
        eprint!(
            "File {} already exists. Replace it? ([y]/n): ",
            path.display()
        );
        io::stderr().flush()?;
        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "ye" | "yes" | "yeah" | "yea" | "ya" => return Ok(true),
            "n" | "no" | "nah" | "nay" => return Ok(false),
            _ => eprintln!("not a valid response, please answer y or n"),
        }
    }
}
