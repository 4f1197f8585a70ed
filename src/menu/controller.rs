//! Two-level interactive menu driving the collection store

use super::prompt::{InputClosed, Prompter};
use super::table::format_table;
use crate::config::TrackerConfig;
use crate::model::{AlbumDraft, Collection};
use crate::persistence;
use anyhow::Result;
use std::io::{BufRead, Write};

const TOP_MENU: &str = "\
Welcome to the Album Collection Tracker!
1. Load an existing collection
2. Create a new collection";

const COLLECTION_MENU: &str = "
Menu:
1. Add Album
2. Update Album
3. Delete Album
4. Search Album
5. Display All Albums
6. Save Collection
7. Load Collection
8. Exit";

/// Interactive session over one collection at a time
///
/// Owns the current collection; loading replaces it wholesale.
pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
    config: TrackerConfig,
    collection: Collection,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(config: TrackerConfig, input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
            collection: Collection::new(),
        }
    }

    /// The collection currently being edited
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Hand back the collection and the output stream
    pub fn into_inner(self) -> (Collection, W) {
        (self.collection, self.prompter.into_output())
    }

    /// Run until the user exits or input ends
    ///
    /// User mistakes and file errors are reported and the menu carries on.
    /// Only failures of the terminal streams are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        match self.run_menus() {
            Err(e) if e.is::<InputClosed>() => {
                log::debug!("Input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn run_menus(&mut self) -> Result<()> {
        loop {
            self.prompter.say(TOP_MENU)?;
            match self.prompter.ask_choice("Choose an option: ")? {
                Some(1) => {
                    if !self.load()? {
                        continue;
                    }
                }
                Some(2) => {
                    self.collection = Collection::new();
                    self.prompter.say("Starting your new collection...")?;
                }
                _ => {
                    self.prompter.say("Invalid choice. Please try again.")?;
                    continue;
                }
            }

            return self.collection_menu();
        }
    }

    fn collection_menu(&mut self) -> Result<()> {
        loop {
            self.prompter.say(COLLECTION_MENU)?;
            match self.prompter.ask_choice("Choose an option: ")? {
                Some(1) => self.add()?,
                Some(2) => self.update()?,
                Some(3) => self.delete()?,
                Some(4) => self.search()?,
                Some(5) => self.display_all()?,
                Some(6) => self.save()?,
                Some(7) => {
                    self.load()?;
                }
                Some(8) => {
                    self.prompter.say("Exiting the program. Goodbye!")?;
                    return Ok(());
                }
                _ => self.prompter.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        let title = self.prompter.ask("Enter title: ")?;
        let artist = self.prompter.ask("Enter artist: ")?;
        let genre = self.prompter.ask("Enter genre: ")?;
        let format = self.prompter.ask("Enter format: ")?;
        let track_count = self.prompter.ask_number("Enter track count: ")?;
        let year = self.prompter.ask_number("Enter year: ")?;

        let draft = AlbumDraft::new(title, artist, genre, format, track_count, year);
        let message = match self.collection.add(draft) {
            Ok(album) => format!("Album '{}' added with ID {}.", album.title, album.id),
            Err(e) => {
                log::debug!("Add failed: {:?}", e);
                format!("Could not add album: {}", e)
            }
        };
        self.prompter.say(message)
    }

    fn update(&mut self) -> Result<()> {
        let Some(id) = self.select_album("update")? else {
            return Ok(());
        };

        self.prompter
            .say("Enter the updated album details. Leave blank to keep current value.")?;
        let draft = AlbumDraft {
            title: self.prompter.ask("Enter new title: ")?,
            artist: self.prompter.ask("Enter new artist: ")?,
            genre: self.prompter.ask("Enter new genre: ")?,
            format: self.prompter.ask("Enter new format: ")?,
            track_count: self.prompter.ask_optional_number("Enter new track count: ")?,
            year: self.prompter.ask_optional_number("Enter new year: ")?,
        };
        if draft.is_blank() {
            return self.prompter.say("Nothing changed.");
        }

        let message = match self.collection.update(id, draft) {
            Ok(album) => format!("'{}' updated successfully!", album.title),
            Err(e) => e.to_string(),
        };
        self.prompter.say(message)
    }

    fn delete(&mut self) -> Result<()> {
        let Some(id) = self.select_album("delete")? else {
            return Ok(());
        };
        let Some(title) = self
            .collection
            .find_by_id(id)
            .and_then(|index| self.collection.get(index))
            .map(|album| album.title.clone())
        else {
            return self.prompter.say(format!("Album with ID {} not found.", id));
        };

        let prompt = format!("Are you sure you want to delete '{}'? Press Y or N: ", title);
        if !self.prompter.confirm(&prompt)? {
            return self.prompter.say("Deletion cancelled.");
        }

        let message = match self.collection.delete(id) {
            Ok(_) => "Album deleted successfully!".to_string(),
            Err(e) => e.to_string(),
        };
        self.prompter.say(message)
    }

    /// Pick one album by ID or by exact title, returning its ID
    fn select_album(&mut self, action: &str) -> Result<Option<u32>> {
        loop {
            self.prompter.say("\nWhat do you want to search by?")?;
            self.prompter.say("1. Album ID")?;
            self.prompter.say("2. Album Title")?;

            match self.prompter.ask_choice("Choose an option: ")? {
                Some(1) => {
                    let prompt = format!("Enter the ID of the album to {}: ", action);
                    let answer = self.prompter.ask(&prompt)?;
                    let Ok(id) = answer.trim().parse::<u32>() else {
                        self.prompter.say(format!("'{}' is not a valid ID.", answer.trim()))?;
                        return Ok(None);
                    };

                    if self.collection.find_by_id(id).is_none() {
                        log::debug!("No album with ID {}", id);
                        self.prompter.say(format!("Album with ID {} not found.", id))?;
                        return Ok(None);
                    }
                    return Ok(Some(id));
                }
                Some(2) => {
                    let prompt = format!("Enter the title of the album to {}: ", action);
                    let title = self.prompter.ask(&prompt)?;

                    let Some(album) = self
                        .collection
                        .find_by_title(&title)
                        .and_then(|index| self.collection.get(index))
                    else {
                        log::debug!("No album titled {:?}", title);
                        self.prompter.say(format!("Album titled '{}' not found.", title))?;
                        return Ok(None);
                    };
                    return Ok(Some(album.id));
                }
                _ => self.prompter.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn search(&mut self) -> Result<()> {
        let query = self.prompter.ask("Enter album title to search: ")?;
        let results = self.collection.search_by_title(&query);

        let message = if results.is_empty() {
            format!("No albums found matching the title '{}'.", query)
        } else {
            format!("\nSearch Results:\n{}", format_table(results))
        };
        self.prompter.say(message)
    }

    fn display_all(&mut self) -> Result<()> {
        let message = if self.collection.is_empty() {
            "No albums in your collection.".to_string()
        } else {
            format!(
                "\nYour Album Collection:\n{}",
                format_table(self.collection.albums())
            )
        };
        self.prompter.say(message)
    }

    fn save(&mut self) -> Result<()> {
        let name = self.prompter.ask("Enter the name of your collection: ")?;

        let saved = self
            .config
            .collection_path(&name)
            .and_then(|path| persistence::save(&path, self.collection.albums()));

        let message = match saved {
            Ok(()) => format!("Your collection '{}' was saved!", name.trim()),
            Err(e) => {
                log::debug!("Save failed: {:?}", e);
                format!("Error saving collection: {}", e)
            }
        };
        self.prompter.say(message)
    }

    /// Replace the current collection with one read from disk
    ///
    /// Returns whether a collection was loaded; on failure the current
    /// collection is left as it was.
    fn load(&mut self) -> Result<bool> {
        let name = self.prompter.ask(
            "Enter the name of the collection you want to load (filename without extension): ",
        )?;

        let loaded = self
            .config
            .collection_path(&name)
            .and_then(|path| persistence::load_collection(&path));

        match loaded {
            Ok(collection) => {
                self.collection = collection;
                self.prompter
                    .say(format!("Collection '{}' loaded successfully!", name.trim()))?;
                Ok(true)
            }
            Err(e) => {
                log::debug!("Load failed: {:?}", e);
                self.prompter.say(format!("Error loading collection: {}", e))?;
                Ok(false)
            }
        }
    }
}
