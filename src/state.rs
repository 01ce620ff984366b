use crate::config::AppConfig;
use crate::functions::FunctionRegistry;

pub struct AppState {
    pub config: AppConfig,
    pub functions: FunctionRegistry,
}
