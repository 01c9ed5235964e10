//! Shared testing utilities for agent-ignition CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PULL_SECRET: &str = r#"{"auths":{"quay.io":{"auth":"Zm9vOmJhcg=="}}}"#;
pub const SSH_KEY: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQC7 core@example\n";

const AGENT_CLUSTER_INSTALL: &str = r#"apiVersion: extensions.hive.openshift.io/v1beta1
kind: AgentClusterInstall
metadata:
  name: test-agent-cluster-install
  namespace: cluster0
spec:
  apiVIP: 192.168.122.10
  clusterDeploymentRef:
    name: ostest
  imageSetRef:
    name: openshift-v4.10.0
  networking:
    clusterNetwork:
    - cidr: 10.128.0.0/14
      hostPrefix: 23
    serviceNetwork:
    - 172.30.0.0/16
  provisionRequirements:
    controlPlaneAgents: 3
    workerAgents: 2
"#;

const INFRA_ENV: &str = r#"apiVersion: agent-install.openshift.io/v1beta1
kind: InfraEnv
metadata:
  name: myinfraenv
  namespace: cluster0
spec:
  clusterRef:
    name: ostest
    namespace: cluster0
  nmStateConfigLabelSelector:
    matchLabels:
      cluster0-nmstate-label-name: cluster0-nmstate-label-value
"#;

const NMSTATE_CONFIG: &str = r#"apiVersion: agent-install.openshift.io/v1beta1
kind: NMStateConfig
metadata:
  name: master-0
  namespace: cluster0
  labels:
    cluster0-nmstate-label-name: cluster0-nmstate-label-value
spec:
  config:
    interfaces:
      - name: eth0
        type: ethernet
        state: up
        ipv4:
          enabled: true
          dhcp: false
          address:
            - ip: 192.168.122.2
              prefix-length: 23
  interfaces:
    - name: eth0
      macAddress: 52:54:01:aa:aa:a1
"#;

/// Stub `nmstatectl` that emits a single keyfile using shell builtins only.
const NMSTATECTL_STUB: &str = r#"#!/bin/sh
printf '%s\n' 'NetworkManager:' '- - eth0.nmconnection' '  - |' '    [connection]' '    id=eth0' '    type=ethernet'
"#;

/// Isolated environment with a manifest directory, a `$HOME` and a `PATH` dir.
pub struct TestContext {
    root: TempDir,
    manifest_dir: PathBuf,
    home: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let manifest_dir = root.path().join("manifests");
        let home = root.path().join("home");
        let bin_dir = root.path().join("bin");
        for dir in [&manifest_dir, &home, &bin_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        Self { root, manifest_dir, home, bin_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn manifest_dir(&self) -> &Path {
        &self.manifest_dir
    }

    /// Write the standard set of cluster manifests, including a pull secret.
    pub fn write_cluster_manifests(&self) {
        self.write_manifest("agent-cluster-install.yaml", AGENT_CLUSTER_INSTALL);
        self.write_manifest("infraenv.yaml", INFRA_ENV);
        self.write_manifest("nmstateconfig.yaml", NMSTATE_CONFIG);
        self.write_manifest(
            "pull-secret.yaml",
            &format!(
                "apiVersion: v1\nkind: Secret\nmetadata:\n  name: pull-secret\nstringData:\n  .dockerconfigjson: '{}'\n",
                PULL_SECRET
            ),
        );
    }

    pub fn write_manifest(&self, name: &str, content: &str) {
        fs::write(self.manifest_dir.join(name), content).expect("Failed to write manifest");
    }

    pub fn write_ssh_key(&self) {
        let ssh_dir = self.home.join(".ssh");
        fs::create_dir_all(&ssh_dir).expect("Failed to create .ssh");
        fs::write(ssh_dir.join("id_rsa.pub"), SSH_KEY).expect("Failed to write SSH key");
    }

    /// Install the `nmstatectl` stub into the private `PATH` directory.
    #[cfg(unix)]
    pub fn install_nmstatectl_stub(&self) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join("nmstatectl");
        fs::write(&path, NMSTATECTL_STUB).expect("Failed to write nmstatectl stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub executable");
    }

    /// Command for the compiled binary with `HOME` and `PATH` isolated.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("agent-ignition").expect("Failed to locate binary");
        cmd.current_dir(self.root())
            .env("HOME", &self.home)
            .env("PATH", &self.bin_dir)
            .env("RUST_LOG", "warn")
            .env_remove("MANIFEST_PATH")
            .env_remove("PULL_SECRET_TOKEN");
        cmd
    }
}
