//! This is an example of how taskflow-core can be used.
//! This binary simply toggles the completion status of every task in the sample list.

use taskflow_core::TaskList;
use taskflow_core::utils::{pause, print_summary, print_task_list};

mod shared;
use shared::sample_tasks;

fn main() {
    env_logger::init();

    println!("This example shows how completion toggling works.");
    println!("Note that toggling never mutates anything: it hands back a new list, and the snapshot you started from stays as it was.");
    println!("You can set the RUST_LOG environment variable to display more info.");
    println!();
    pause();

    let tasks = sample_tasks();
    println!("---- before -----");
    print_task_list(&tasks);
    print_summary(&tasks);

    let toggled = toggle_all_tasks(&tasks);

    println!("---- after -----");
    print_task_list(&toggled);
    print_summary(&toggled);

    println!("---- the original snapshot, untouched -----");
    print_summary(&tasks);
}

fn toggle_all_tasks(tasks: &TaskList) -> TaskList {
    let mut n_toggled = 0;

    let ids: Vec<_> = tasks.iter().map(|task| task.id().clone()).collect();
    let mut current = tasks.clone();
    for id in ids {
        current = current.toggle_completion(&id);
        n_toggled += 1;
    }

    println!("{} tasks toggled.", n_toggled);
    current
}
