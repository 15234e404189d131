//! Live search over services and trainings.

use sea_orm::{
    sea_query::{BinOper, Expr, Func, SimpleExpr},
    Condition, DatabaseConnection, QueryFilter, QuerySelect,
};
use serde::Serialize;
use tracing::{debug, instrument};

use models::{service, training};

use crate::errors::ServiceError;

/// Per entity type.
pub const RESULTS_PER_TYPE: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Service,
    Training,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub id: i32,
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
}

/// Escape LIKE metacharacters and wrap in `%…%`. Case is left to the database.
pub fn contains_pattern(query: &str) -> String {
    let mut out = String::with_capacity(query.len() + 2);
    out.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// `LOWER(col) LIKE LOWER(pattern) ESCAPE '\'`: one lowercasing rule for both sides,
/// whatever the backend's `lower()` covers.
pub(crate) fn icontains<C: sea_orm::ColumnTrait>(col: C, pattern: &str) -> SimpleExpr {
    let pattern = SimpleExpr::Binary(
        Box::new(Func::lower(Expr::val(pattern)).into()),
        BinOper::Escape,
        Box::new(SimpleExpr::Constant('\\'.into())),
    );
    Expr::expr(Func::lower(Expr::col(col))).binary(BinOper::Like, pattern)
}

fn media_url(media_prefix: &str, path: &str) -> Option<String> {
    (!path.trim().is_empty()).then(|| format!("{media_prefix}{}", path.trim_start_matches('/')))
}

/// Services first, then trainings, each capped at [`RESULTS_PER_TYPE`]. An empty query
/// yields nothing.
#[instrument(skip(db))]
pub async fn search(db: &DatabaseConnection, query: &str, media_prefix: &str) -> Result<Vec<SearchResult>, ServiceError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = contains_pattern(query);

    let services = service::ordered()
        .filter(
            Condition::any()
                .add(icontains(service::Column::Name, &pattern))
                .add(icontains(service::Column::ShortDescription, &pattern)),
        )
        .limit(RESULTS_PER_TYPE)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    let trainings = training::ordered()
        .filter(
            Condition::any()
                .add(icontains(training::Column::Name, &pattern))
                .add(icontains(training::Column::ShortDescription, &pattern)),
        )
        .limit(RESULTS_PER_TYPE)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    debug!(services = services.len(), trainings = trainings.len(), "search matched");

    let mut results = Vec::with_capacity(services.len() + trainings.len());
    results.extend(services.into_iter().map(|s| SearchResult {
        kind: ResultKind::Service,
        id: s.id,
        url: s.detail_path(),
        image: media_url(media_prefix, &s.image),
        name: s.name,
        description: s.short_description,
    }));
    results.extend(trainings.into_iter().map(|t| SearchResult {
        kind: ResultKind::Training,
        id: t.id,
        url: t.detail_path(),
        image: media_url(media_prefix, &t.image),
        name: t.name,
        description: t.short_description,
    }));
    Ok(results)
}
