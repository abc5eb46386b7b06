/// Read-only view over the per-run configuration. Implemented by both the CLI
/// and the TOML configuration so the engine stays agnostic of the source.
pub trait ConfigProvider: Send + Sync {
    fn server(&self) -> &str;
    fn project_key(&self) -> &str;
    fn username(&self) -> Option<&str>;
    fn password(&self) -> Option<&str>;
    fn include_manual(&self) -> bool;
    fn proxy_url(&self) -> Option<&str>;
    fn proxy_username(&self) -> Option<&str>;
    fn proxy_password(&self) -> Option<&str>;
    fn timeout_ms(&self) -> Option<u64>;
    fn output_path(&self) -> &str;
}
