//! Element collection handlers.
//!
//! These routes filter the dataset on one column and always answer `200 OK`
//! with a JSON array, which is empty when nothing matches.

use axum::{
    extract::State,
    response::Response,
};
use periodic_persistence::ElementStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{IntegerParam, TextParam};
use crate::responses::element_collection_response;
use crate::state::AppState;

/// Handler listing the whole dataset.
///
/// # HTTP Request
///
/// `GET [base]/elements`
pub async fn all_elements_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!("Processing list of all elements");

    let elements = state.elements().all_elements().await?;
    Ok(element_collection_response(elements))
}

/// Handler for elements in a period.
///
/// # HTTP Request
///
/// `GET [base]/elements/period/{period}`
///
/// # Response
///
/// - `200 OK` - Matching elements, possibly none
/// - `400 Bad Request` - The period is not an integer
pub async fn elements_by_period_handler<S>(
    State(state): State<AppState<S>>,
    IntegerParam(period): IntegerParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(period, "Processing elements by period");

    let elements = state.elements().by_period(period).await?;
    Ok(element_collection_response(elements))
}

/// Handler for elements in a group.
///
/// # HTTP Request
///
/// `GET [base]/elements/group/{group}`
pub async fn elements_by_group_handler<S>(
    State(state): State<AppState<S>>,
    IntegerParam(group): IntegerParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(group, "Processing elements by group");

    let elements = state.elements().by_group(group).await?;
    Ok(element_collection_response(elements))
}

/// Handler for elements of a type such as `Noble Gas`, ignoring case.
///
/// # HTTP Request
///
/// `GET [base]/elements/type/{element_type}`
pub async fn elements_by_type_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(element_type): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(element_type = %element_type, "Processing elements by type");

    let elements = state.elements().by_type(&element_type).await?;
    Ok(element_collection_response(elements))
}

/// Handler for the `Natural` flag.
///
/// `GET [base]/elements/natural/{value}`
pub async fn elements_by_natural_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(value): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(value = %value, "Processing elements by natural flag");

    let elements = state.elements().by_natural(&value).await?;
    Ok(element_collection_response(elements))
}

/// Handler for the `Metal` flag.
///
/// `GET [base]/elements/metal/{value}`
pub async fn elements_by_metal_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(value): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(value = %value, "Processing elements by metal flag");

    let elements = state.elements().by_metal(&value).await?;
    Ok(element_collection_response(elements))
}

/// Handler for the `Metalloid` flag.
///
/// `GET [base]/elements/metalloid/{value}`
pub async fn elements_by_metalloid_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(value): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(value = %value, "Processing elements by metalloid flag");

    let elements = state.elements().by_metalloid(&value).await?;
    Ok(element_collection_response(elements))
}

/// Handler for the `Nonmetal` flag.
///
/// `GET [base]/elements/nonmetal/{value}`
pub async fn elements_by_nonmetal_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(value): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(value = %value, "Processing elements by nonmetal flag");

    let elements = state.elements().by_nonmetal(&value).await?;
    Ok(element_collection_response(elements))
}

/// Handler for the `Radioactive` flag.
///
/// `GET [base]/elements/radioactive/{value}`
pub async fn elements_by_radioactive_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(value): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(value = %value, "Processing elements by radioactive flag");

    let elements = state.elements().by_radioactive(&value).await?;
    Ok(element_collection_response(elements))
}

/// Handler for elements in a phase (`gas`, `liq`, `solid`, ...).
///
/// `GET [base]/elements/phase/{phase}`
pub async fn elements_by_phase_handler<S>(
    State(state): State<AppState<S>>,
    TextParam(phase): TextParam,
) -> RestResult<Response>
where
    S: ElementStore + ?Sized,
{
    debug!(phase = %phase, "Processing elements by phase");

    let elements = state.elements().by_phase(&phase).await?;
    Ok(element_collection_response(elements))
}
