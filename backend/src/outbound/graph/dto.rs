//! Transport DTOs for the Neo4j transactional HTTP endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{TraversalQuery, TraversalRows};

#[derive(Debug, Serialize)]
pub(super) struct CommitRequestDto {
    pub(super) statements: Vec<StatementDto>,
}

#[derive(Debug, Serialize)]
pub(super) struct StatementDto {
    pub(super) statement: &'static str,
    pub(super) parameters: ParametersDto,
}

#[derive(Debug, Serialize)]
pub(super) struct ParametersDto {
    pub(super) node_id: i64,
}

impl From<&TraversalQuery> for CommitRequestDto {
    fn from(query: &TraversalQuery) -> Self {
        Self {
            statements: vec![StatementDto {
                statement: query.statement(),
                parameters: ParametersDto {
                    node_id: query.start().get(),
                },
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CommitResponseDto {
    #[serde(default)]
    pub(super) results: Vec<ResultDto>,
    #[serde(default)]
    pub(super) errors: Vec<ErrorDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResultDto {
    #[serde(default)]
    pub(super) data: Vec<RecordDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RecordDto {
    pub(super) row: Value,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorDto {
    pub(super) code: String,
    #[serde(default)]
    pub(super) message: String,
}

impl CommitResponseDto {
    /// Rows of the first statement, or the first reported error.
    pub(super) fn into_rows(self) -> Result<TraversalRows, ErrorDto> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        let rows = self
            .results
            .into_iter()
            .next()
            .map(|result| result.data.into_iter().map(|record| record.row).collect())
            .unwrap_or_default();
        Ok(TraversalRows::new(rows))
    }
}
