use super::{MarkerFrame, Session, UiEvent};
use crate::error::SessionError;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// A recorded sequence of map screen events
#[derive(Debug, Clone, Deserialize)]
pub struct EventScript {
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub at_ms: u64,

    pub event: UiEvent,
}

impl EventScript {
    /// Load a script from YAML (JSON is accepted too)
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path).map_err(|e| SessionError::ReadScript {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, SessionError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Feed every step through the session and collect the rendered frames.
/// A query still pending after the last step is applied at its due time.
pub fn replay(session: &mut Session<'_>, script: &EventScript) -> Vec<MarkerFrame> {
    let mut frames = Vec::new();
    let mut clock = 0;

    for step in &script.steps {
        if step.at_ms < clock {
            warn!(
                "Step at {}ms is earlier than {}ms, replaying it at {}ms",
                step.at_ms, clock, clock
            );
        }
        clock = clock.max(step.at_ms);
        frames.extend(session.handle(clock, step.event.clone()));
    }

    frames.extend(session.finish());

    info!(
        "Replayed {} steps into {} frames",
        script.steps.len(),
        frames.len()
    );
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Place};
    use chrono::Utc;

    fn catalog() -> Catalog {
        let names = ["Aula 201", "Biblioteca Central", "Auditorio"];
        let places = names
            .iter()
            .enumerate()
            .map(|(i, name)| Place {
                id: (i + 1).to_string(),
                name: Some(name.to_string()),
                description: None,
                category: None,
                category_name: None,
                latitude: Some(-12.044 - i as f64 * 0.001),
                longitude: Some(-76.9527),
                floor: None,
                building: None,
            })
            .collect();
        Catalog::new(places, vec![], Utc::now())
    }

    #[test]
    fn test_replay_script() {
        let script = EventScript::parse(
            r#"
steps:
  - at_ms: 0
    event:
      kind: viewport
      latitude: -12.044
      longitude: -76.9527
      latitude_delta: 0.005
      longitude_delta: 0.005
  - at_ms: 100
    event: { kind: type, text: "a" }
  - at_ms: 250
    event: { kind: type, text: "au" }
  - at_ms: 400
    event: { kind: select, id: "3" }
"#,
        )
        .unwrap();

        let catalog = catalog();
        let mut session = Session::new(&catalog, 30, 300);
        let frames = replay(&mut session, &script);

        // viewport, select, then the flushed "au" query
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].selected_id.as_deref(), Some("3"));
        assert_eq!(frames[2].at_ms, 550);
        assert_eq!(frames[2].query, "au");
        let ids: Vec<&str> = frames[2].markers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_out_of_order_steps_are_clamped() {
        let script = EventScript::parse(
            r#"
steps:
  - at_ms: 500
    event: { kind: deselect }
  - at_ms: 100
    event: { kind: clear }
"#,
        )
        .unwrap();

        let catalog = catalog();
        let mut session = Session::new(&catalog, 30, 300);
        let frames = replay(&mut session, &script);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].at_ms, 500);
    }

    #[test]
    fn test_missing_script_file() {
        let err = EventScript::load(Path::new("nope/script.yaml")).unwrap_err();
        assert!(matches!(err, SessionError::ReadScript { .. }));
    }
}
