//! `keyforge gen`

use super::write_json;
use crate::cli::{GenArgs, MAX_COUNT};
use crate::config::Config;
use crate::output::Generated;
use keyforge_common::{Result, ensure};
use keyforge_key::{
    Generate, GeneratorKind, RandomSource, SeededRandom, Strength, SystemRandom, estimate_bits,
};
use log::warn;
use std::io::Write;

/// Generate `args.count` values and print them
///
/// # Errors
///
/// Returns an error for an unknown generator, invalid options, or a write
/// failure.
pub fn handle_gen<W: Write>(
    config: &Config,
    args: &GenArgs,
    use_json: bool,
    out: &mut W,
) -> Result<()> {
    let kind: GeneratorKind = args.generator.parse()?;
    ensure!(args.count > 0, validation, "--count must be at least 1");
    ensure!(
        args.count <= MAX_COUNT,
        validation,
        "--count must be at most {}, got {}",
        MAX_COUNT,
        args.count
    );

    let builder = Generate::kind(kind)
        .options(&config.options_for(kind))
        .options(&args.overrides());
    let options = builder.current_options().clone();

    if let (Some(length), Some(range)) = (options.length, kind.length_range())
        && !range.contains(&length)
    {
        warn!(
            "Length {length} is outside the suggested range {}..={} for {}",
            range.start(),
            range.end(),
            kind.id()
        );
    }

    let mut source: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            warn!("Using seeded output; values are reproducible and not secret");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(SystemRandom::new()),
    };
    let values = builder.generate_many_with(source.as_mut(), args.count)?;

    let entropy_bits = estimate_bits(kind, &options)?;
    let strength = Strength::from_bits(entropy_bits);

    if use_json {
        return write_json(
            out,
            &Generated {
                generator: kind.id(),
                values,
                seeded: args.seed.is_some(),
                entropy_bits,
                strength: strength.to_string(),
            },
        );
    }

    for value in &values {
        writeln!(out, "{value}")?;
    }
    if args.show_strength {
        writeln!(out, "# ~{entropy_bits:.1} bits of entropy ({strength})")?;
    }
    Ok(())
}
