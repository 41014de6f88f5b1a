fn main() {
    projver::app::startup::startup();
}
