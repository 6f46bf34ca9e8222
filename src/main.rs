fn main() {
    buddy_sandbox::game::run();
}
