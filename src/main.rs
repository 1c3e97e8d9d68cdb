mod constants;
mod engine;
mod tools;

use engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
