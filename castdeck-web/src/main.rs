use castdeck_web::App;

fn main() {
    dioxus::launch(App);
}
