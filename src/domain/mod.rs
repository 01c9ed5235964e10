pub mod cluster;
pub mod data_url;
pub mod error;
pub mod ignition;
pub mod network;
pub mod template;

pub use cluster::{AgentClusterInstall, InfraEnv, LabelSelector};
pub use error::AppError;
pub use ignition::{Config, File, IGNITION_VERSION, PasswdUser, Unit};
pub use network::{HostStaticNetworkConfig, MacInterfaceMapping, NmStateConfig, StaticNetworkFile};
pub use template::{TemplateParams, render_template};
