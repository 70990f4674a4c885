use clap::Parser;
use logbook::application::{
    list_journals, AccessService, AddEntryService, ChangePasswordService, ConfigService,
    CreateJournalService, InitService,
};
use logbook::cli::{format_entry, format_journal, format_journal_list, Cli, Commands};
use logbook::error::LogbookError;
use logbook::infrastructure::{Config, FileSystemRepository, JournalStore};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_store() -> Result<JournalStore, LogbookError> {
    let repo = FileSystemRepository::discover()?;
    Ok(JournalStore::new(repo))
}

fn run(cli: Cli) -> Result<(), LogbookError> {
    match cli.command {
        Commands::Init {
            path,
            journal_dir,
            extension,
        } => {
            let config = Config {
                journal_dir,
                extension,
            };
            let repo = InitService::execute(&path, config)?;
            println!("Initialized logbook workspace at {}", path.display());
            println!("Journals: {}", repo.journal_dir().display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("journal_dir = {}", config.journal_dir.display());
                println!("extension = {}", config.extension);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: logbook config [--list | <key> [<value>]]");
                println!("Valid keys: journal_dir, extension");
            }
            Ok(())
        }
        Commands::Create {
            name,
            password,
            username,
        } => {
            let store = open_store()?;
            let journal =
                CreateJournalService::new(&store).execute(&name, username.as_deref(), &password)?;
            println!("Created journal {}", journal.name());
            Ok(())
        }
        Commands::Show { name, auth, limit } => {
            let store = open_store()?;
            let journal = AccessService::new(&store).authorize(
                &name,
                auth.username.as_deref(),
                &auth.password,
            )?;
            print!("{}", format_journal(&journal, limit));
            Ok(())
        }
        Commands::Add { name, auth, text } => {
            let store = open_store()?;
            let entry = AddEntryService::new(&store).execute(
                &name,
                auth.username.as_deref(),
                &auth.password,
                &text.join(" "),
            )?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::Passwd {
            name,
            auth,
            new,
            confirm,
        } => {
            let store = open_store()?;
            ChangePasswordService::new(&store).execute(
                &name,
                auth.username.as_deref(),
                &auth.password,
                &new,
                &confirm,
            )?;
            println!("Password changed for {}", name);
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let names = list_journals(&repo)?;
            println!("{}", format_journal_list(&names).trim_end());
            Ok(())
        }
    }
}
