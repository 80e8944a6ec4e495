fn main() {
    dioxus::launch(prado_web::App);
}
