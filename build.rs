fn main() {
    // cfg.toml is read at compile time by toml-cfg; make sure edits retrigger a build.
    println!("cargo:rerun-if-changed=cfg.toml");
}
