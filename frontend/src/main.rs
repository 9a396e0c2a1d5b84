fn main() {
    presensi_frontend::run();
}
