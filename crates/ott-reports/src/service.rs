use bson::Document;
use ott_query::{CollectionRole, ReportQuery};
use ott_source::DocumentSource;
use tracing::debug;

use crate::error::ReportError;
use crate::render::render_document;
use crate::request::{FieldsData, ReportRequest, ReportResponse};

pub struct ReportService<S> {
    source: S,
}

impl<S: DocumentSource> ReportService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Top-level keys of one arbitrary document, or empty for an empty
    /// collection. Which document is sampled is up to the source.
    pub async fn sample_fields(&self, role: CollectionRole) -> Result<Vec<String>, ReportError> {
        let sample = self.source.find_one(role.collection()).await?;
        Ok(sample
            .map(|doc| doc.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Samples all three collections concurrently. Any failure fails the lot.
    pub async fn fields_data(&self) -> Result<FieldsData, ReportError> {
        let (organisation, script, user) = tokio::try_join!(
            self.sample_fields(CollectionRole::Organisation),
            self.sample_fields(CollectionRole::Script),
            self.sample_fields(CollectionRole::User),
        )?;

        Ok(FieldsData {
            organisation,
            script,
            user,
        })
    }

    /// Partitions the conditions, runs the three projected queries
    /// concurrently and merges the results. Any failure fails the lot.
    pub async fn generate_reports(
        &self,
        request: &ReportRequest,
    ) -> Result<ReportResponse, ReportError> {
        let no_conditions = Document::new();
        let conditions = request.conditions.as_ref().unwrap_or(&no_conditions);
        let [organisation, script, user] = request.fields.plan(conditions);

        let (organisation, script, user) = tokio::try_join!(
            self.run(CollectionRole::Organisation, &organisation),
            self.run(CollectionRole::Script, &script),
            self.run(CollectionRole::User, &user),
        )?;

        Ok(ReportResponse {
            organisation,
            script,
            user,
        })
    }

    async fn run(
        &self,
        role: CollectionRole,
        query: &ReportQuery,
    ) -> Result<Vec<serde_json::Value>, ReportError> {
        let docs = self.source.find(role.collection(), query).await?;
        debug!(
            collection = role.collection(),
            conditions = query.filter.len(),
            matched = docs.len(),
            "report query"
        );
        Ok(docs.into_iter().map(render_document).collect())
    }
}
