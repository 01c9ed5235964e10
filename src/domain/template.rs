use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use url::{Host, Url};

use super::AppError;

/// The fixed set of values every bundled template may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub service_protocol: String,
    pub service_base_url: String,
    pub pull_secret_token: String,
    pub node_zero_ip: String,
    /// `node_zero_ip` in URL host form, bracketed for IPv6.
    pub node_zero_host: String,
    pub assisted_service_host: String,
    pub api_vip: String,
    pub control_plane_agents: u32,
    pub worker_agents: u32,
}

impl TemplateParams {
    /// Derive the parameter set from the service URL and cluster values.
    pub fn new(
        service_base_url: &Url,
        pull_secret_token: &str,
        api_vip: &str,
        control_plane_agents: u32,
        worker_agents: u32,
    ) -> Self {
        let hostname = match service_base_url.host() {
            Some(Host::Ipv6(addr)) => addr.to_string(),
            Some(host) => host.to_string(),
            None => String::new(),
        };
        let host = service_base_url.host_str().unwrap_or_default();
        let assisted_service_host = match service_base_url.port_or_known_default() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Self {
            service_protocol: service_base_url.scheme().to_string(),
            service_base_url: service_base_url.to_string(),
            pull_secret_token: pull_secret_token.to_string(),
            node_zero_ip: hostname,
            node_zero_host: host.to_string(),
            assisted_service_host,
            api_vip: api_vip.to_string(),
            control_plane_agents,
            worker_agents,
        }
    }
}

/// Render `source` with `params`.
///
/// Unknown keys are errors rather than empty substitutions. Output is never
/// escaped, whatever the extension of `name`.
pub fn render_template(name: &str, source: &str, params: &TemplateParams) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.add_template(name, source).map_err(|err| AppError::TemplateSyntax {
        name: name.to_string(),
        reason: err.to_string(),
    })?;
    env.get_template(name)
        .and_then(|template| template.render(params))
        .map_err(|err| AppError::TemplateRender { name: name.to_string(), reason: err.to_string() })
}
