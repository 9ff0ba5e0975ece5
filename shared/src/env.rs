#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

// ENV が未設定・不正値のときはビルドプロファイルに合わせる
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match std::env::var("ENV").as_deref() {
        Ok("production") => Environment::Production,
        Ok("development") => Environment::Development,
        _ => default_env,
    }
}
