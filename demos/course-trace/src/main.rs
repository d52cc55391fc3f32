//! course-trace — steps a handful of mobility models and logs what a radio
//! propagation layer would consume: course changes, and per-step
//! terminal ↔ site distance, bearing and relative speed.
//!
//! ```text
//! course-trace                              # built-in scenario
//! course-trace -s city.toml -v              # debug logging
//! course-trace --set walker.EntityId=77     # attribute override
//! course-trace --list-attributes            # settable names and kinds
//! ```

mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use km_core::SimTime;
use km_mobility::attributes::{ATTRIBUTES, Access};
use km_mobility::{MobilityModel, StreamAllocator};

use scenario::{DEFAULT_SCENARIO, Scenario};

#[derive(Debug, Parser)]
#[command(name = "course-trace", version, about = "Trace course changes and pairwise geometry")]
struct Cli {
    /// Scenario TOML file.  Uses a built-in three-entity scenario if omitted.
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Attribute override, `entity.Attribute=value` (repeatable).
    #[arg(long = "set", value_name = "ENTITY.ATTR=VALUE")]
    overrides: Vec<String>,

    /// Print the attribute table accepted by `--set` and exit.
    #[arg(long)]
    list_attributes: bool,

    /// Raise log verbosity (-v debug, -vv trace).  `RUST_LOG` wins if set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Entity {
    name:  String,
    model: Box<dyn MobilityModel>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Split `walker.EntityId=77` into `("walker", "EntityId", "77")`.
fn parse_override(raw: &str) -> Result<(&str, &str, &str)> {
    let (lhs, value) = raw.split_once('=').ok_or_else(|| anyhow!("override {raw:?} has no '='"))?;
    let (entity, attr) = lhs
        .rsplit_once('.')
        .ok_or_else(|| anyhow!("override {raw:?} must be entity.Attribute=value"))?;
    Ok((entity, attr, value))
}

fn build_entities(scenario: &Scenario, overrides: &[String]) -> Result<Vec<Entity>> {
    let parsed: Vec<(&str, &str, &str)> =
        overrides.iter().map(|o| parse_override(o)).collect::<Result<_>>()?;

    for (entity, _, _) in &parsed {
        if !scenario.entities.iter().any(|e| e.name == *entity) {
            return Err(anyhow!("override names unknown entity {entity:?}"));
        }
    }

    let mut entities = Vec::with_capacity(scenario.entities.len());
    for spec in &scenario.entities {
        let config = spec
            .config
            .with_overrides(
                parsed
                    .iter()
                    .filter(|(e, _, _)| *e == spec.name)
                    .map(|(_, attr, value)| (*attr, *value)),
            )
            .with_context(|| format!("entity {:?}", spec.name))?;

        let mut model = spec.build(scenario.run_seed)?;
        let label = spec.name.clone();
        model.connect_course_change(Box::new(move |m: &dyn MobilityModel| {
            info!(
                entity   = %label,
                position = %m.position(),
                velocity = %m.velocity(),
                "course change"
            );
        }));
        config.apply_to(model.as_mut());
        entities.push(Entity { name: spec.name.clone(), model });
    }
    Ok(entities)
}

fn print_attributes() {
    for a in &ATTRIBUTES {
        let access = match a.access {
            Access::ReadWrite => "rw",
            Access::ReadOnly  => "ro",
        };
        println!("{:<12} {:<7} {access}  default {:<8} {}", a.name, a.kind.as_str(), a.default.to_string(), a.help);
    }
}

fn report_links(entities: &[Entity], now: SimTime) {
    let (terminals, sites): (Vec<&Entity>, Vec<&Entity>) =
        entities.iter().partition(|e| e.model.is_terminal());
    for term in &terminals {
        for site in &sites {
            let distance = term.model.distance_from(site.model.as_ref());
            let bearing = site.model.angle_from(term.model.as_ref());
            let rel_speed = term.model.relative_speed(site.model.as_ref());
            info!(
                %now,
                terminal    = %term.name,
                terminal_id = term.model.entity_id().get(),
                site        = %site.name,
                site_id     = site.model.entity_id().get(),
                distance,
                bearing,
                rel_speed,
                "link"
            );
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.list_attributes {
        print_attributes();
        return Ok(());
    }

    let text = match &cli.scenario {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => DEFAULT_SCENARIO.to_owned(),
    };
    let scenario = Scenario::parse(&text)?;

    let mut entities = build_entities(&scenario, &cli.overrides)?;

    let mut streams = StreamAllocator::new(scenario.stream_start);
    for e in &mut entities {
        streams.assign(e.model.as_mut());
    }
    info!(
        entities = entities.len(),
        first    = scenario.stream_start,
        next     = streams.next_index(),
        "streams assigned"
    );

    let steps = (scenario.duration_secs / scenario.step_secs).floor() as u64;
    for step in 0..=steps {
        let now = SimTime::from_secs_f64(step as f64 * scenario.step_secs);
        for e in &mut entities {
            e.model.update(now);
        }
        report_links(&entities, now);
    }

    Ok(())
}
