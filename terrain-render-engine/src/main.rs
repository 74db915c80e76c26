use crate::engine::core::app_setup::{ViewerConfig, create_app};

mod engine;

fn main() {
    let config = ViewerConfig::from_args(std::env::args().skip(1));
    let mut app = create_app(config);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
