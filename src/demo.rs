// Demo mode: seed the board with sample projects
//
// Projects go in through the form exactly as typed input would, so the
// validation rules and the store notifications run for every one of them.
// One sample is then dragged to the finished list.
//
// Run with: PROJBOARD_DEMO=1 projboard  (or `projboard --demo`)

use crate::board::Board;
use crate::model::ProjectStatus;
use anyhow::Result;

/// (title, description, people)
const SAMPLES: &[(&str, &str, &str)] = &[
    ("Build shed", "Garden tool shed", "3"),
    ("Paint fence", "Two coats of paint", "4"),
    ("Plan trip", "Trains and hostels", "5"),
    ("Fix bike", "New chain, brakes", "3"),
];

/// Index into SAMPLES of the project that starts out finished
const FINISHED_SAMPLE: usize = 3;

/// Submit the sample projects and finish one of them
pub fn seed(board: &Board) -> Result<()> {
    for (title, description, people) in SAMPLES {
        board.fill_form(title, description, people)?;
        board.submit_form()?;

        if let Some(alert) = board.take_alert() {
            tracing::warn!("Demo project '{}' rejected: {}", title, alert);
        }
    }

    let finished_id = board
        .store()
        .dump_projects()
        .iter()
        .find(|p| p.title == SAMPLES[FINISHED_SAMPLE].0)
        .map(|p| p.id.clone());
    if let Some(id) = finished_id {
        board.drag_project(&id, ProjectStatus::Finished);
    }

    tracing::info!("Demo board seeded with {} projects", board.store().len());
    Ok(())
}
