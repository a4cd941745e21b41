//! Main entry point for the rzim CLI application.
//!
//! This binary prints the header of a ZIM archive and can optionally run
//! the full checksum verification pass. A structural violation while
//! opening is reported as an error; a checksum mismatch is reported
//! through the exit status, since the file is well-formed but corrupt.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rzim::{Archive, Cli, ReadAt};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let archive = Archive::open(&cli.file)?;

    if !cli.quiet {
        print_header(&archive)?;
    }

    if cli.check {
        let ok = archive.verify()?;
        if !cli.quiet {
            println!("checksum:        {}", if ok { "OK" } else { "MISMATCH" });
        }
        if !ok {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Print the decoded header, one field per line.
fn print_header<R: ReadAt>(archive: &Archive<R>) -> Result<()> {
    let header = archive.header();

    println!(
        "version:         {}.{}",
        header.major_version, header.minor_version
    );
    println!("uuid:            {}", header.uuid_string());
    println!("entry count:     {}", header.entry_count);
    println!("cluster count:   {}", header.cluster_count);
    println!("url ptr pos:     {}", header.url_ptr_pos);
    println!("title ptr pos:   {}", header.title_ptr_pos);
    println!("cluster ptr pos: {}", header.cluster_ptr_pos);
    println!("mime list pos:   {}", header.mime_list_pos);
    if header.has_main_page() {
        println!("main page:       {}", header.main_page);
    } else {
        println!("main page:       (none)");
    }
    if header.has_layout_page() {
        println!("layout page:     {}", header.layout_page);
    } else {
        println!("layout page:     (none)");
    }
    println!("checksum pos:    {}", header.checksum_pos);
    println!("checksum:        {}", archive.checksum()?);
    println!("file size:       {}", archive.size());

    Ok(())
}
