use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
mod auth;
use kzreader::import::{self, ImportedRsaPrivateKeyReader, ImportedRsaPublicKeyReader};
use kzreader::{FileReader, KeyReader, PbeReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrivatePurpose {
    /// Signing and verification
    Sign,
    /// Encryption and decryption
    Crypt,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PublicPurpose {
    /// Encryption only
    Encrypt,
    /// Verification only
    Verify,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CertPurpose {
    /// Verification only
    Verify,
    /// Encryption only
    Crypt,
}

#[derive(Debug, Parser)]
#[command(name = "kzread")]
#[command(
    version,
    about = "Read metadata and key material from JSON key stores, or import PEM keys into the store format."
)]
struct Cli {
    /// Path to the key store directory
    #[arg(long, global = true, value_name = "DIR", env = "KZREAD_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the store metadata
    Meta,

    /// Prints the key material of one version
    #[command(arg_required_else_help = true)]
    Key {
        version: u32,

        /// Key versions are password protected
        #[arg(long, default_value_t = false)]
        pbe: bool,

        /// Read the store password from this file instead of KZREAD_PASSWORD
        #[arg(long, value_name = "FILE", env = "KZREAD_PASSWORD_FILE")]
        password_file: Option<PathBuf>,
    },

    /// Imports a PKCS#1 RSA private key from a PEM file
    #[command(arg_required_else_help = true)]
    ImportPrivate {
        pem: PathBuf,
        #[arg(long, value_enum)]
        purpose: PrivatePurpose,
    },

    /// Imports a PKIX RSA public key from a PEM file
    #[command(arg_required_else_help = true)]
    ImportPublic {
        pem: PathBuf,
        #[arg(long, value_enum)]
        purpose: PublicPurpose,
    },

    /// Imports the RSA public key of a PEM X.509 certificate
    #[command(arg_required_else_help = true)]
    ImportCert {
        pem: PathBuf,
        #[arg(long, value_enum)]
        purpose: CertPurpose,
    },
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("KZREAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_store(path: Option<PathBuf>) -> Result<FileReader> {
    let path = path.context("no key store given; use --store or KZREAD_STORE")?;
    Ok(FileReader::new(path.to_string_lossy()))
}

fn print_store(reader: &impl KeyReader) -> Result<()> {
    println!("{}", reader.metadata()?);
    println!("{}", *reader.key(1)?);
    Ok(())
}

fn import_private(pem: &Path, purpose: PrivatePurpose) -> Result<ImportedRsaPrivateKeyReader> {
    let reader = match purpose {
        PrivatePurpose::Sign => import::import_rsa_key_from_pem_for_signing(pem),
        PrivatePurpose::Crypt => import::import_rsa_key_from_pem_for_crypt(pem),
    };
    reader.with_context(|| format!("failed to import '{}'", pem.display()))
}

fn import_public(pem: &Path, purpose: PublicPurpose) -> Result<ImportedRsaPublicKeyReader> {
    let reader = match purpose {
        PublicPurpose::Encrypt => import::import_rsa_public_key_from_pem_for_encryption(pem),
        PublicPurpose::Verify => import::import_rsa_public_key_from_pem_for_verify(pem),
    };
    reader.with_context(|| format!("failed to import '{}'", pem.display()))
}

fn import_cert(pem: &Path, purpose: CertPurpose) -> Result<ImportedRsaPublicKeyReader> {
    let reader = match purpose {
        CertPurpose::Verify => import::import_rsa_public_key_from_certificate_for_verify(pem),
        CertPurpose::Crypt => import::import_rsa_public_key_from_certificate_for_crypt(pem),
    };
    reader.with_context(|| format!("failed to import '{}'", pem.display()))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    init_logging();

    match args.command {
        Commands::Meta => {
            let reader = resolve_store(args.store)?;
            println!("{}", reader.metadata()?);
        }
        Commands::Key {
            version,
            pbe,
            password_file,
        } => {
            let plain = resolve_store(args.store)?;
            let reader: Box<dyn KeyReader> = if pbe {
                let password = auth::read_password(password_file.as_deref())?;
                Box::new(PbeReader::new(plain, password.as_bytes()))
            } else {
                Box::new(plain)
            };
            let key = reader
                .key(version)
                .with_context(|| format!("failed to read key version {version}"))?;
            println!("{}", *key);
        }
        Commands::ImportPrivate { pem, purpose } => {
            print_store(&import_private(&pem, purpose)?)?;
        }
        Commands::ImportPublic { pem, purpose } => {
            print_store(&import_public(&pem, purpose)?)?;
        }
        Commands::ImportCert { pem, purpose } => {
            print_store(&import_cert(&pem, purpose)?)?;
        }
    }

    Ok(())
}
