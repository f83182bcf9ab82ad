//! Fixed dataset written to an empty store on first launch.

/// The seed task collection, stored verbatim under the `tasks` key when the
/// store is cold. Kept as the exact persisted text so the first launch and
/// every later launch read byte-identical data.
pub const SEED_TASKS_JSON: &str = r#"[
  {
    "id": 1711929600000,
    "title": "Plan the product roadmap",
    "description": "Collect feature requests and rank them.",
    "status": "todo",
    "board": "Launch Roadmap"
  },
  {
    "id": 1711929600001,
    "title": "Draft the onboarding guide",
    "description": "",
    "status": "doing",
    "board": "Launch Roadmap"
  },
  {
    "id": 1711929600002,
    "title": "Publish the landing page",
    "description": "Copy reviewed and signed off.",
    "status": "done",
    "board": "Launch Roadmap"
  }
]"#;

/// Name of the first board in the seed collection.
pub const SEED_FIRST_BOARD: &str = "Launch Roadmap";
