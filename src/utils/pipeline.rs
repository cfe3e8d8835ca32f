//! Ordered guard pipelines.
//!
//! Every operation is a fixed list of guards followed by one terminal step. Guards run in
//! order against a shared [`Exchange`]; the first one that returns `Err` ends the request
//! and the terminal never runs, so a rejected request cannot touch the store.

use super::{error::Error, id::IdGenerator, store::Record};
use axum::{
    async_trait,
    body::{Body as HttpBody, Bytes},
    extract::{rejection::JsonRejection, FromRequest, Json, Request},
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

/// The `{ "data": { .. } }` envelope every request body travels in.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Body {
    #[serde(default)]
    pub data: Value,
}

impl Body {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Field of `data`, or `None` when the key is absent or `data` is not an object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Converts `data` into the typed payload for `R`. Unknown fields are dropped.
    pub fn parse<R: Record, T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(self.data.clone()).map_err(|err| {
            tracing::debug!("Failed to convert {} payload: {}", R::RESOURCE, err);
            Error::bad_request(format!("{} data is invalid: {}", R::RESOURCE, err))
        })
    }
}

/// An empty body, or one sent without a JSON content type, is read as an envelope without
/// `data` so the guards decide how to reject it. Malformed JSON is still a rejection.
#[async_trait]
impl<S> FromRequest<S> for Body
where
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let mut req = Request::new(HttpBody::from(bytes));
        *req.headers_mut() = headers;

        match Json::<Self>::from_request(req, state).await {
            Ok(Json(body)) => Ok(body),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self::default()),
            Err(rejection) => Err(rejection),
        }
    }
}

/// Per-request state shared by the steps of a pipeline.
pub struct Exchange<'a, R: Record> {
    pub records: &'a mut Vec<R>,
    pub ids: &'a dyn IdGenerator,
    pub route_id: Option<String>,
    pub body: Body,
    located: Option<usize>,
}

impl<'a, R: Record> Exchange<'a, R> {
    pub fn new(records: &'a mut Vec<R>, ids: &'a dyn IdGenerator) -> Self {
        Self {
            records,
            ids,
            route_id: None,
            body: Body::default(),
            located: None,
        }
    }

    pub fn with_route_id(mut self, route_id: impl Into<String>) -> Self {
        self.route_id = Some(route_id.into());
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn locate(&mut self, index: usize) {
        self.located = Some(index);
    }

    pub fn located_index(&self) -> Result<usize, Error> {
        self.located
            .filter(|index| *index < self.records.len())
            .ok_or_else(|| Error::internal(format!("{} was not located", R::RESOURCE)))
    }

    pub fn located(&self) -> Result<&R, Error> {
        let index = self.located_index()?;
        Ok(&self.records[index])
    }

    pub fn located_mut(&mut self) -> Result<&mut R, Error> {
        let index = self.located_index()?;
        Ok(&mut self.records[index])
    }
}

pub type Guard<R> = Box<dyn Fn(&mut Exchange<'_, R>) -> Result<(), Error> + Send + Sync>;
pub type Terminal<R, S> = Box<dyn Fn(&mut Exchange<'_, R>) -> Result<S, Error> + Send + Sync>;

pub struct Pipeline<R: Record, S> {
    guards: Vec<Guard<R>>,
    terminal: Terminal<R, S>,
}

/// Starts a pipeline for records of type `R`.
pub fn builder<R: Record>() -> PipelineBuilder<R> {
    PipelineBuilder { guards: vec![] }
}

impl<R: Record, S> Pipeline<R, S> {
    pub fn run(&self, exchange: &mut Exchange<'_, R>) -> Result<S, Error> {
        for guard in &self.guards {
            guard(exchange)?;
        }

        (self.terminal)(exchange)
    }
}

pub struct PipelineBuilder<R: Record> {
    guards: Vec<Guard<R>>,
}

impl<R: Record> PipelineBuilder<R> {
    pub fn guard<F>(mut self, guard: F) -> Self
    where
        F: Fn(&mut Exchange<'_, R>) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.guards.push(Box::new(guard));
        self
    }

    pub fn then<S, F>(self, terminal: F) -> Pipeline<R, S>
    where
        F: Fn(&mut Exchange<'_, R>) -> Result<S, Error> + Send + Sync + 'static,
    {
        Pipeline {
            guards: self.guards,
            terminal: Box::new(terminal),
        }
    }
}
