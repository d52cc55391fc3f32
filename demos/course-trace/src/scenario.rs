//! TOML scenario format and model construction.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use km_core::Vector;
use km_mobility::{
    Bounds, ConstantPositionModel, ConstantVelocityModel, HierarchicalModel, MobilityConfig,
    MobilityModel, RandomWalkModel, RandomWalkParams,
};

/// Built-in scenario used when no file is given: one cell site, a walking
/// handset and a handset riding in a vehicle.
pub const DEFAULT_SCENARIO: &str = r#"
run_seed      = 1
stream_start  = 0
duration_secs = 10.0
step_secs     = 1.0

[[entity]]
name        = "site-1"
is_terminal = false
entity_id   = 1
position    = { x = 0.0, y = 0.0, z = 30.0 }
motion      = { kind = "constant-position" }

[[entity]]
name      = "walker"
entity_id = 1001
position  = { x = 50.0, y = 0.0, z = 1.5 }
motion    = { kind = "random-walk", speed_min = 1.0, speed_max = 2.0, change_interval_secs = 2.0, bounds = { x_min = -200.0, x_max = 200.0, y_min = -200.0, y_max = 200.0 } }

[[entity]]
name      = "passenger"
entity_id = 1002
position  = { x = -99.5, y = 20.0, z = 1.0 }
motion    = { kind = "vehicle", start = { x = -100.0, y = 20.0, z = 0.0 }, velocity = { x = 15.0, y = 0.0, z = 0.0 }, jitter = { speed_min = 0.0, speed_max = 0.5, change_interval_secs = 1.0 } }
"#;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub run_seed:      u64,
    #[serde(default)]
    pub stream_start:  i64,
    pub duration_secs: f64,
    pub step_secs:     f64,
    #[serde(rename = "entity", default)]
    pub entities:      Vec<EntitySpec>,
}

#[derive(Debug, Deserialize)]
pub struct EntitySpec {
    pub name:   String,
    #[serde(flatten)]
    pub config: MobilityConfig,
    pub motion: MotionSpec,
}

/// Jitter walk applied inside a vehicle frame.
#[derive(Debug, Deserialize)]
pub struct JitterSpec {
    pub speed_min:            f64,
    pub speed_max:            f64,
    pub change_interval_secs: f64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MotionSpec {
    ConstantPosition,
    ConstantVelocity {
        velocity: Vector,
    },
    RandomWalk {
        speed_min:            f64,
        speed_max:            f64,
        change_interval_secs: f64,
        bounds:               Option<Bounds>,
    },
    /// A constant-velocity vehicle carrying the entity.  The entity's
    /// `position` is absolute; its offset from `start` becomes the
    /// in-vehicle offset.
    Vehicle {
        start:    Vector,
        velocity: Vector,
        jitter:   Option<JitterSpec>,
    },
}

impl Scenario {
    pub fn parse(text: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(text).context("invalid scenario TOML")?;
        if !(scenario.step_secs > 0.0) {
            bail!("step_secs must be positive, got {}", scenario.step_secs);
        }
        if scenario.entities.is_empty() {
            bail!("scenario has no [[entity]] entries");
        }
        Ok(scenario)
    }
}

impl EntitySpec {
    /// Build the model for this entity.  Configuration is applied separately
    /// so sinks can be connected first.
    pub fn build(&self, run_seed: u64) -> Result<Box<dyn MobilityModel>> {
        let model: Box<dyn MobilityModel> = match &self.motion {
            MotionSpec::ConstantPosition => Box::new(ConstantPositionModel::default()),
            MotionSpec::ConstantVelocity { velocity } => {
                Box::new(ConstantVelocityModel::new(Vector::ZERO, *velocity))
            }
            MotionSpec::RandomWalk { speed_min, speed_max, change_interval_secs, bounds } => {
                let params = RandomWalkParams {
                    speed_min:            *speed_min,
                    speed_max:            *speed_max,
                    change_interval_secs: *change_interval_secs,
                    bounds:               *bounds,
                    run_seed,
                };
                Box::new(
                    RandomWalkModel::new(Vector::ZERO, params)
                        .with_context(|| format!("entity {:?}", self.name))?,
                )
            }
            MotionSpec::Vehicle { start, velocity, jitter } => {
                let vehicle = Box::new(ConstantVelocityModel::new(*start, *velocity));
                let rider: Box<dyn MobilityModel> = match jitter {
                    Some(j) => {
                        let params = RandomWalkParams {
                            speed_min:            j.speed_min,
                            speed_max:            j.speed_max,
                            change_interval_secs: j.change_interval_secs,
                            bounds:               None,
                            run_seed,
                        };
                        Box::new(
                            RandomWalkModel::new(Vector::ZERO, params)
                                .with_context(|| format!("entity {:?} jitter", self.name))?,
                        )
                    }
                    None => Box::new(ConstantPositionModel::default()),
                };
                Box::new(HierarchicalModel::new(vehicle, rider))
            }
        };
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_parses_and_builds() {
        let s = Scenario::parse(DEFAULT_SCENARIO).unwrap();
        assert_eq!(s.entities.len(), 3);
        assert!(!s.entities[0].config.is_terminal);
        assert_eq!(s.entities[1].config.entity_id, 1001);
        assert!(s.entities[1].config.is_terminal);
        for e in &s.entities {
            e.build(s.run_seed).unwrap();
        }
    }

    #[test]
    fn vehicle_rider_uses_absolute_position() {
        let s = Scenario::parse(DEFAULT_SCENARIO).unwrap();
        let spec = &s.entities[2];
        let mut m = spec.build(s.run_seed).unwrap();
        spec.config.apply_to(m.as_mut());
        assert_eq!(m.position(), Vector::new(-99.5, 20.0, 1.0));
        assert_eq!(m.assign_streams(0), 2);
    }

    #[test]
    fn rejects_empty_and_bad_step() {
        assert!(Scenario::parse("run_seed = 1\nduration_secs = 1.0\nstep_secs = 1.0\n").is_err());
        let bad = DEFAULT_SCENARIO.replace("step_secs     = 1.0", "step_secs     = 0.0");
        assert!(Scenario::parse(&bad).is_err());
    }
}
