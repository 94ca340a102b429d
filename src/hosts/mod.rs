//! Hosts
//!
//! Hosts are the source domains whose DNS points at EasyRedir.

mod types;

pub use types::{Host, HostAttributes};

use crate::error::{Error, Result};
use crate::http::{send_json, ApiRequest, Transport};
use crate::pagination::{paginate, Collection, ListOptions, Page, PageSource};
use crate::types::{resource_path, DataEnvelope};
use async_trait::async_trait;

/// Collection path of the hosts endpoint
pub const HOSTS_PATH: &str = "/hosts";

/// Accessor for the hosts endpoint
pub struct Hosts<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> Hosts<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Fetch one host by id.
    ///
    /// A response describing a different host is rejected.
    pub async fn get(&self, id: &str) -> Result<Host> {
        let path = resource_path(HOSTS_PATH.trim_start_matches('/'), id)?;
        let host: DataEnvelope<Host> =
            send_json(self.transport, ApiRequest::get(path), "host").await?;

        if host.data.id != id {
            return Err(Error::protocol(format!(
                "received incorrect host: {}",
                host.data.id
            )));
        }
        Ok(host.data)
    }

    /// Fetch the single page selected by `options`
    pub async fn list_page(&self, options: &ListOptions) -> Result<Page<Host>> {
        let request = ApiRequest::get(options.to_path_query(HOSTS_PATH));
        send_json(self.transport, request, "hosts page").await
    }

    /// Fetch every page starting from `options`
    pub async fn list(&self, options: &ListOptions) -> Result<Collection<Host>> {
        paginate(self, options).await
    }
}

#[async_trait]
impl<'a, T: Transport + ?Sized> PageSource for Hosts<'a, T> {
    type Record = Host;

    async fn fetch_page(&self, options: &ListOptions) -> Result<Page<Host>> {
        self.list_page(options).await
    }
}
