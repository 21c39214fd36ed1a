//! Data sources: the REST fetcher and the in-memory fixture source share the
//! [`DataSource`] trait so pages never know which one they talk to.

use super::dispatcher::{MutationKind, MutationRequest};
use super::envelope::{unwrap_items, unwrap_stats};
use super::error::{ApiError, ListError};
use super::filter::{apply_filters, sort_rows};
use super::normalize::{normalize_all, resolve};
use super::page::PageResult;
use super::query::QueryState;
use super::row::Row;
use super::schema::{EntitySchema, FilterMode, StatsScope};
use super::stats::Stats;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Transport-neutral request description.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API prefix, e.g. `/users`.
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP collaborator. Empty response bodies come back as `Value::Null`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

#[async_trait(?Send)]
pub trait DataSource {
    fn schema(&self) -> &'static EntitySchema;

    async fn fetch(&self, query: &QueryState) -> Result<PageResult, ListError>;

    /// Summary counts from a dedicated endpoint, if the resource has one.
    async fn fetch_stats(&self) -> Result<Option<Stats>, ListError> {
        Ok(None)
    }

    /// Runs a mutation and returns the server-confirmed object, if any.
    async fn mutate(&self, request: &MutationRequest) -> Result<Option<Value>, ListError>;
}

/// Backend parameters for a query.
///
/// Client-filtered resources fetch everything once, so they send nothing.
pub fn query_params(query: &QueryState, schema: &EntitySchema) -> Vec<(String, String)> {
    if schema.filter_mode == FilterMode::Client {
        return Vec::new();
    }

    let mut params = vec![
        ("page".to_string(), query.page.to_string()),
        ("limit".to_string(), query.page_size.to_string()),
    ];

    if let Some(sort) = &query.sort {
        let field = schema
            .field(&sort.field)
            .map(|f| f.wire_name())
            .unwrap_or(sort.field.as_str());
        params.push(("sortBy".to_string(), field.to_string()));
        params.push(("sortOrder".to_string(), sort.order().to_string()));
    }

    let term = query.search.trim();
    if !term.is_empty() {
        params.push((schema.search_param.to_string(), term.to_string()));
    }

    for (key, value) in &query.filters {
        match schema.field(key) {
            Some(field) => params.push((field.wire_name().to_string(), field.kind.to_wire(value))),
            None => params.push((key.clone(), value.clone())),
        }
    }

    params
}

/// Wire body for a set of field values, keyed by backend names.
pub fn wire_body(values: &BTreeMap<String, String>, schema: &EntitySchema) -> Value {
    let body: Map<String, Value> = values
        .iter()
        .map(|(name, value)| match schema.field(name) {
            Some(field) => (
                field.wire_name().to_string(),
                Value::String(field.kind.to_wire(value)),
            ),
            None => (name.clone(), Value::String(value.clone())),
        })
        .collect();
    Value::Object(body)
}

/// REST call for a mutation.
pub fn mutation_request(request: &MutationRequest, schema: &EntitySchema) -> ApiRequest {
    let item = schema.item_path(&request.row_id);
    match &request.kind {
        MutationKind::Update { changes } => {
            ApiRequest::new(Method::Put, item).with_body(wire_body(changes, schema))
        }
        MutationKind::Delete => ApiRequest::new(Method::Delete, item),
        MutationKind::SetStatus { status } => {
            ApiRequest::new(Method::Patch, format!("{}/status", item))
                .with_body(serde_json::json!({ "status": status }))
        }
        MutationKind::Assign { assignee } => {
            let key = schema
                .assign_field
                .and_then(|name| schema.field(name))
                .map(|f| f.wire_name())
                .unwrap_or("assignedTo");
            let mut body = Map::new();
            body.insert(key.to_string(), Value::String(assignee.clone()));
            ApiRequest::new(Method::Patch, format!("{}/assign", item)).with_body(Value::Object(body))
        }
    }
}

/// Envelope unwrap + normalization of a list body.
pub fn parse_page(body: &Value, schema: &EntitySchema) -> Result<PageResult, ListError> {
    let unwrapped = unwrap_items(body, schema.collection_keys).ok_or_else(|| {
        ListError::Envelope(format!("{}: no item sequence in response", schema.name))
    })?;
    let rows = normalize_all(unwrapped.items, schema);
    if schema.filter_mode == FilterMode::Client {
        return Ok(PageResult::unpaginated(rows));
    }
    Ok(PageResult::new(rows, unwrapped.total_items))
}

/// Fetcher backed by the REST API.
pub struct RestSource<T: HttpTransport> {
    transport: T,
    schema: &'static EntitySchema,
}

impl<T: HttpTransport> RestSource<T> {
    pub fn new(transport: T, schema: &'static EntitySchema) -> Self {
        Self { transport, schema }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST` to the resource with the given field values.
    pub async fn create(&self, values: &BTreeMap<String, String>) -> Result<Option<Value>, ListError> {
        let request = ApiRequest::new(Method::Post, self.schema.resource)
            .with_body(wire_body(values, self.schema));
        let body = self.transport.send(request).await.map_err(ListError::mutation)?;
        log::info!("{}: created item", self.schema.name);
        Ok((!body.is_null()).then_some(body))
    }

    /// Nested collection of one item, e.g. `/events/:id/registrations`.
    pub async fn fetch_children(
        &self,
        id: &str,
        segment: &str,
        child: &'static EntitySchema,
    ) -> Result<Vec<Row>, ListError> {
        let path = format!("{}/{}", self.schema.item_path(id), segment);
        let body = self
            .transport
            .send(ApiRequest::get(path))
            .await
            .map_err(ListError::fetch)?;
        parse_page(&body, child).map(|page| page.rows)
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> DataSource for RestSource<T> {
    fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    async fn fetch(&self, query: &QueryState) -> Result<PageResult, ListError> {
        let request =
            ApiRequest::get(self.schema.endpoint).with_params(query_params(query, self.schema));
        log::debug!("{}: GET {} {:?}", self.schema.name, request.path, request.params);
        let body = self.transport.send(request).await.map_err(ListError::fetch)?;
        parse_page(&body, self.schema)
    }

    async fn fetch_stats(&self) -> Result<Option<Stats>, ListError> {
        let StatsScope::Endpoint(path) = self.schema.stats_scope else {
            return Ok(None);
        };
        let body = self
            .transport
            .send(ApiRequest::get(path))
            .await
            .map_err(ListError::fetch)?;
        Ok(Some(unwrap_stats(&body)))
    }

    async fn mutate(&self, request: &MutationRequest) -> Result<Option<Value>, ListError> {
        let api = mutation_request(request, self.schema);
        log::debug!("{}: {} {}", self.schema.name, api.method.as_str(), api.path);
        let body = self.transport.send(api).await.map_err(ListError::mutation)?;
        Ok((!body.is_null()).then_some(body))
    }
}

/// In-memory source over raw backend-shaped items (mock data).
///
/// Filtering, sorting and paging run locally; mutations edit the items.
pub struct FixtureSource {
    schema: &'static EntitySchema,
    items: RefCell<Vec<Value>>,
}

impl FixtureSource {
    pub fn new(schema: &'static EntitySchema, items: Vec<Value>) -> Self {
        Self {
            schema,
            items: RefCell::new(items),
        }
    }

    /// Parses any supported envelope shape.
    pub fn from_json(schema: &'static EntitySchema, json: &str) -> Result<Self, ListError> {
        let body: Value =
            serde_json::from_str(json).map_err(|e| ListError::Envelope(e.to_string()))?;
        let items = unwrap_items(&body, schema.collection_keys)
            .map(|u| u.items.to_vec())
            .ok_or_else(|| ListError::Envelope(format!("{}: no fixture items", schema.name)))?;
        Ok(Self::new(schema, items))
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items
            .borrow()
            .iter()
            .position(|item| resolve(item, self.schema.id_aliases).as_deref() == Some(id))
    }

    fn set_wire(item: &mut Value, key: &str, value: String) {
        if let Some(object) = item.as_object_mut() {
            object.insert(key.to_string(), Value::String(value));
        }
    }
}

#[async_trait(?Send)]
impl DataSource for FixtureSource {
    fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    async fn fetch(&self, query: &QueryState) -> Result<PageResult, ListError> {
        let rows = normalize_all(&self.items.borrow(), self.schema);
        let mut rows = apply_filters(&rows, query, self.schema);
        if let Some(sort) = &query.sort {
            sort_rows(&mut rows, sort);
        }
        let total_items = rows.len();
        let page: Vec<Row> = rows
            .into_iter()
            .skip(query.offset())
            .take(query.page_size)
            .collect();
        Ok(PageResult::new(page, Some(total_items)))
    }

    async fn mutate(&self, request: &MutationRequest) -> Result<Option<Value>, ListError> {
        let index = self.position(&request.row_id).ok_or_else(|| ListError::Mutation {
            status: Some(404),
            message: format!("{} {} not found", self.schema.label, request.row_id),
        })?;

        let mut items = self.items.borrow_mut();
        if request.kind == MutationKind::Delete {
            items.remove(index);
            return Ok(None);
        }

        let item = &mut items[index];
        match &request.kind {
            MutationKind::Update { changes } => {
                if let Value::Object(body) = wire_body(changes, self.schema) {
                    for (key, value) in body {
                        if let Some(object) = item.as_object_mut() {
                            object.insert(key, value);
                        }
                    }
                }
            }
            MutationKind::SetStatus { status } => {
                if let Some(field) = self.schema.status_field.and_then(|f| self.schema.field(f)) {
                    Self::set_wire(item, field.wire_name(), status.clone());
                }
            }
            MutationKind::Assign { assignee } => {
                if let Some(field) = self.schema.assign_field.and_then(|f| self.schema.field(f)) {
                    Self::set_wire(item, field.wire_name(), assignee.clone());
                }
            }
            MutationKind::Delete => {}
        }
        Ok(Some(item.clone()))
    }
}
