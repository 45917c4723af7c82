//! Form handlers - the single HTML page

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};

use crate::AppState;
use crate::features::FeatureVector;
use crate::view::{render_page, Banner};

/// Empty form with default values
pub async fn index() -> Html<String> {
    Html(render_page(&FeatureVector::default(), None))
}

/// Form submission; the page is rebuilt from the submitted values only
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<FeatureVector>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let sample = match form {
        Ok(Form(sample)) => sample,
        Err(rejection) => {
            // Undecodable body: nothing to echo back, so show the defaults
            tracing::warn!("Form body rejected: {}", rejection.body_text());
            let banner = Banner::Failure(rejection.body_text());
            let page = render_page(&FeatureVector::default(), Some(&banner));
            return (rejection.status(), Html(page));
        }
    };

    match super::score_sample(&state, &sample) {
        Ok(result) => {
            let page = render_page(&sample, Some(&Banner::Prediction(result)));
            (StatusCode::OK, Html(page))
        }
        Err(err) => {
            tracing::warn!("Form submission rejected: {}", err);
            let page = render_page(&sample, Some(&Banner::Failure(err.message().to_string())));
            (err.status(), Html(page))
        }
    }
}
