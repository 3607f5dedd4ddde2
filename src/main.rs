#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("novadesk-site {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: novadesk-site [--version]");
      eprintln!();
      eprintln!("Configured through the environment:");
      eprintln!("  HOST, PORT, STATIC_DIR, CONTACT_TO, CONTACT_FROM,");
      eprintln!("  SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS, RUST_LOG");
      return;
    }
  }

  if let Err(e) = novadesk_site::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
