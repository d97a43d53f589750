mod allow_list;
mod assets;
mod frontend;
mod routes;
mod security;
mod state;

pub use allow_list::{RouteProfile, RouteTable};
pub use assets::AssetTree;
pub use routes::{bind_listener, create_router};
pub use security::nosniff_layer;
pub use state::AppState;
