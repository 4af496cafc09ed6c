fn main() {
    slint_build::compile("ui/record_window.slint").expect("failed to compile slint sources");
}
