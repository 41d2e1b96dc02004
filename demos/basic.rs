//! This is an example of how taskflow-core can be used.
//! This binary walks through the operations behind the app's task screen:
//! listing, searching, adding, editing and deleting tasks.

use std::error::Error;

use taskflow_core::{Category, CategoryFilter, Priority, TaskDraft, TaskFilter, TaskList};
use taskflow_core::utils::{pause, print_summary, print_task, print_task_list};

mod shared;
use shared::sample_tasks;

fn main() {
    env_logger::init();

    println!("This example walks through the task screen of the app: every operation");
    println!("takes a task list and hands back the values the screen would render.");
    println!("You can set the RUST_LOG environment variable to display more info about what happens to the list.");
    println!();
    pause();

    let tasks = sample_tasks();
    println!("---- The sample tasks -----");
    print_task_list(&tasks);
    print_summary(&tasks);

    run_through_the_screens(tasks).unwrap();
}

fn run_through_the_screens(tasks: TaskList) -> Result<(), Box<dyn Error>> {
    println!("---- Tasks matching the search \"dentist\" -----");
    let search = TaskFilter::new().with_search_text("dentist");
    for task in tasks.filter(&search) {
        print_task(task);
    }

    // The chip row of the app is "All" plus the well-known categories
    print!("---- The filter chips: All");
    for category in Category::known() {
        print!(" | {}", category);
    }
    println!(" -----");

    println!("---- Tasks under the \"Work\" chip -----");
    let work_only = TaskFilter::new().with_category(CategoryFilter::from_chip("Work"));
    for task in tasks.filter(&work_only) {
        print_task(task);
    }

    println!("---- Adding a task -----");
    let draft = TaskDraft::new("Water the plants")
        .with_description("The balcony ones, not the cactus")
        .with_priority(Priority::Low);
    let tasks = tasks.upsert(&draft, None)?;
    print_task_list(&tasks);

    // The single validation rule of the app
    match tasks.upsert(&TaskDraft::new("   "), None) {
        Ok(_) => println!("This should not happen!"),
        Err(reason) => println!("(A blank draft was turned down: \"{}\")", reason),
    }

    println!("---- Renaming the task we just added -----");
    // Newly created tasks are prepended, so ours is the first one
    let plants_id = tasks.iter().next().unwrap().id().clone();
    let renamed = TaskDraft::new("Water the balcony plants")
        .with_priority(Priority::Low);
    let tasks = tasks.upsert(&renamed, Some(&plants_id))?;
    print_task_list(&tasks);

    println!("---- Completing it, then deleting it -----");
    let tasks = tasks.toggle_completion(&plants_id);
    print_summary(&tasks);
    let tasks = tasks.delete(&plants_id);
    print_task_list(&tasks);
    print_summary(&tasks);

    Ok(())
}
