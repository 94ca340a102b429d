//! Redirect rules
//!
//! `GET /rules` is paginated; [`Rules::list`] follows every page while
//! [`Rules::list_page`] returns one.

mod types;

pub use types::{Rule, RuleAttributes};

use crate::error::{Result, ResultExt};
use crate::http::{send_json, ApiRequest, Transport};
use crate::pagination::{paginate, Collection, ListOptions, Page, PageSource};
use crate::types::{resource_path, DataEnvelope};
use async_trait::async_trait;
use tracing::info;

/// Collection path of the rules endpoint
pub const RULES_PATH: &str = "/rules";

const RULE_TYPE: &str = "rule";

/// Accessor for the rules endpoint
pub struct Rules<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> Rules<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Fetch the single page selected by `options`
    pub async fn list_page(&self, options: &ListOptions) -> Result<Page<Rule>> {
        let request = ApiRequest::get(options.to_path_query(RULES_PATH));
        send_json(self.transport, request, "rules page").await
    }

    /// Fetch every page starting from `options`
    pub async fn list(&self, options: &ListOptions) -> Result<Collection<Rule>> {
        paginate(self, options).await
    }

    /// Create a rule
    pub async fn create(&self, attributes: &RuleAttributes) -> Result<Rule> {
        let request = ApiRequest::post(RULES_PATH, rule_body(attributes)?);
        let created: DataEnvelope<Rule> = send_json(self.transport, request, "rule").await?;
        info!("Created rule {}", created.data.id);
        Ok(created.data)
    }

    /// Update the given attributes of a rule; unset attributes are left alone
    pub async fn update(&self, id: &str, attributes: &RuleAttributes) -> Result<Rule> {
        let request = ApiRequest::patch(rule_path(id)?, rule_body(attributes)?);
        let updated: DataEnvelope<Rule> = send_json(self.transport, request, "rule").await?;
        Ok(updated.data)
    }

    /// Delete a rule
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.transport.send(ApiRequest::delete(rule_path(id)?)).await?;
        info!("Removed rule {id}");
        Ok(())
    }
}

#[async_trait]
impl<'a, T: Transport + ?Sized> PageSource for Rules<'a, T> {
    type Record = Rule;

    async fn fetch_page(&self, options: &ListOptions) -> Result<Page<Rule>> {
        self.list_page(options).await
    }
}

fn rule_path(id: &str) -> Result<String> {
    resource_path(RULES_PATH.trim_start_matches('/'), id)
}

fn rule_body(attributes: &RuleAttributes) -> Result<serde_json::Value> {
    let body = DataEnvelope {
        data: Rule {
            id: String::new(),
            kind: RULE_TYPE.to_string(),
            attributes: attributes.clone(),
        },
    };
    serde_json::to_value(body).context("unable to encode rule")
}
