//! Handlers for the static booth layout and the placement helpers built on it.
//!
//! These endpoints read only the in-memory [`BoothIndex`](boothplan_core::spatial::BoothIndex)
//! and need neither authentication nor the database.

use std::collections::HashSet;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use boothplan_core::layout::{BoothDefinition, Segment};
use boothplan_core::placement::{contiguous_group_around, find_best_placement};
use boothplan_core::spatial::CanvasDimensions;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Full layout as drawn by the editor.
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub canvas: CanvasDimensions,
    pub booths: Vec<BoothDefinition>,
}

/// Canvas position to resolve.
#[derive(Debug, Deserialize)]
pub struct LocateParams {
    pub x: f64,
    pub y: f64,
}

/// Request body for `POST /layout/suggest`.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub row: char,
    pub segment: Segment,
    pub count: usize,
    /// Pointer y position; the chosen run is the free one centred nearest to it.
    pub target_y: f64,
    #[serde(default)]
    pub occupied: HashSet<String>,
}

/// Query for `GET /layout/group`.
#[derive(Debug, Deserialize)]
pub struct GroupParams {
    pub booth_id: String,
    pub count: usize,
}

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let layout = LayoutResponse {
        canvas: state.booths.canvas_dimensions(),
        booths: state.booths.booths().to_vec(),
    };

    Ok(Json(DataResponse { data: layout }))
}

/// GET /api/v1/layout/locate?x=&y=
///
/// Row and segment under a canvas position, or `null` between rows.
pub async fn locate(
    State(state): State<AppState>,
    Query(params): Query<LocateParams>,
) -> AppResult<impl IntoResponse> {
    let location = state.booths.segment_at(params.x, params.y);

    Ok(Json(DataResponse { data: location }))
}

/// POST /api/v1/layout/suggest
///
/// Best free run for a hover position, or `null` when the segment cannot
/// hold one.
pub async fn suggest(
    State(state): State<AppState>,
    Json(input): Json<SuggestRequest>,
) -> AppResult<impl IntoResponse> {
    let run = find_best_placement(
        &state.booths,
        input.row,
        input.segment,
        input.count,
        input.target_y,
        &input.occupied,
    );

    Ok(Json(DataResponse { data: run }))
}

/// GET /api/v1/layout/group?booth_id=&count=
///
/// Run of `count` booths centred on a booth, ignoring occupancy.
pub async fn group_around(
    State(state): State<AppState>,
    Query(params): Query<GroupParams>,
) -> AppResult<impl IntoResponse> {
    let run = contiguous_group_around(&state.booths, &params.booth_id, params.count);

    Ok(Json(DataResponse { data: run }))
}
