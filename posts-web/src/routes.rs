//! Named routes of the posts backend.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub method: HttpMethod,
    pub pattern: &'static str,
}

impl Route {
    fn needs_id(&self) -> bool {
        self.pattern.contains("{id}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Unknown(String),
    MissingId(&'static str),
    UnexpectedId(&'static str),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown route: {name}"),
            Self::MissingId(name) => write!(f, "route {name} needs an id"),
            Self::UnexpectedId(name) => write!(f, "route {name} takes no id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn posts() -> Self {
        let route = |name, method, pattern| Route {
            name,
            method,
            pattern,
        };

        Self {
            routes: vec![
                route("posts.index", HttpMethod::Get, "/posts"),
                route("posts.create", HttpMethod::Get, "/posts/create"),
                route("posts.store", HttpMethod::Post, "/posts"),
                route("posts.show", HttpMethod::Get, "/posts/{id}"),
                route("posts.edit", HttpMethod::Get, "/posts/{id}/edit"),
                route("posts.update", HttpMethod::Put, "/posts/{id}"),
                route("posts.destroy", HttpMethod::Delete, "/posts/{id}"),
            ],
        }
    }

    pub fn route(&self, name: &str) -> Result<&Route, RouteError> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .ok_or_else(|| RouteError::Unknown(name.to_string()))
    }

    pub fn url(&self, name: &str, id: Option<i64>) -> Result<String, RouteError> {
        let route = self.route(name)?;
        match (route.needs_id(), id) {
            (true, Some(id)) => Ok(route.pattern.replace("{id}", &id.to_string())),
            (true, None) => Err(RouteError::MissingId(route.name)),
            (false, Some(_)) => Err(RouteError::UnexpectedId(route.name)),
            (false, None) => Ok(route.pattern.to_string()),
        }
    }

    pub fn method(&self, name: &str) -> Result<HttpMethod, RouteError> {
        self.route(name).map(|route| route.method)
    }
}
