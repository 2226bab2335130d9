use kanban_board::board::*;
use kanban_board::models::*;
use speculate2::speculate;

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("CAM-1", "Update user profile page", "usr-1", "Todo", 4),
        Task::new("CAM-2", "Add multi-language support", "usr-2", "In Progress", 3),
        Task::new("CAM-3", "Optimize database queries", "usr-2", "In Progress", 1),
        Task::new("CAM-4", "Implement email notifications", "usr-1", "Todo", 3),
        Task::new("CAM-5", "Enhance search functionality", "usr-5", "Backlog", 0),
        Task::new("CAM-6", "Conduct security vulnerability", "usr-1", "Todo", 4),
    ]
}

speculate! {
    before {
        let engine = BoardEngine::new().expect("Failed to create engine");
    }

    describe "grouping" {
        it "returns no groups for an empty task list in every mode" {
            for group_by in [GroupBy::Status, GroupBy::User, GroupBy::Priority] {
                for order_by in [OrderBy::Priority, OrderBy::Title] {
                    let groups = engine.group(&[], ViewOptions::new(group_by, order_by));
                    assert!(groups.is_empty());
                }
            }
        }

        it "groups by status in order of discovery" {
            let tasks = sample_tasks();
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::Status, OrderBy::Priority));

            assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Todo", "In Progress", "Backlog"]);
            assert_eq!(groups.task_count(), tasks.len());
        }

        it "groups by owning user identifier" {
            let tasks = sample_tasks();
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::User, OrderBy::Title));

            assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["usr-1", "usr-2", "usr-5"]);
            assert_eq!(groups.get("usr-1").unwrap().len(), 3);
        }

        it "keeps out-of-range priorities as their own groups" {
            let tasks = vec![
                Task::new("T1", "a", "u", "Todo", 4),
                Task::new("T2", "b", "u", "Todo", 7),
            ];
            let options = ViewOptions::new(GroupBy::Priority, OrderBy::Priority);
            let groups = engine.group(&tasks, options);

            assert_eq!(groups.len(), 2);
            assert_eq!(ids(groups.get("4").unwrap()), vec!["T1"]);
            assert_eq!(ids(groups.get("7").unwrap()), vec!["T2"]);
        }

        it "lists priority columns in ascending order" {
            let tasks = vec![
                Task::new("T1", "a", "u", "Todo", 4),
                Task::new("T2", "b", "u", "Done", 0),
                Task::new("T3", "c", "u", "Todo", 2),
            ];
            let options = ViewOptions::new(GroupBy::Priority, OrderBy::Title);
            let groups = engine.group(&tasks, options);

            assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["0", "2", "4"]);
        }

        it "groups a user missing from the snapshot under the raw identifier" {
            let tasks = vec![Task::new("T1", "a", "U9", "Todo", 1)];
            let snapshot = Snapshot::new(tasks.clone(), vec![User::new("usr-1", "Anoop", true)]);
            let options = ViewOptions::new(GroupBy::User, OrderBy::Priority);
            let groups = engine.group(&snapshot.tasks, options);

            assert_eq!(ids(groups.get("U9").unwrap()), vec!["T1"]);
            assert_eq!(snapshot.user_name("U9"), UNKNOWN_USER);
        }
    }

    describe "ordering" {
        it "puts higher priority first" {
            let tasks = vec![
                Task::new("T1", "B", "u", "Todo", 2),
                Task::new("T2", "A", "u", "Todo", 4),
            ];
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::Status, OrderBy::Priority));

            assert_eq!(ids(groups.get("Todo").unwrap()), vec!["T2", "T1"]);
        }

        it "puts titles in ascending order" {
            let tasks = vec![
                Task::new("T1", "B", "u", "Todo", 2),
                Task::new("T2", "A", "u", "Todo", 4),
            ];
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::Status, OrderBy::Title));

            assert_eq!(ids(groups.get("Todo").unwrap()), vec!["T2", "T1"]);
        }

        it "keeps input order for equal priorities" {
            let tasks = sample_tasks();
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::Status, OrderBy::Priority));

            assert_eq!(ids(groups.get("Todo").unwrap()), vec!["CAM-1", "CAM-6", "CAM-4"]);
        }

        it "keeps input order for identical titles" {
            let tasks = vec![
                Task::new("T1", "Same", "u", "Todo", 0),
                Task::new("T2", "Other", "u", "Todo", 0),
                Task::new("T3", "Same", "u", "Todo", 4),
            ];
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::Status, OrderBy::Title));

            assert_eq!(ids(groups.get("Todo").unwrap()), vec!["T2", "T1", "T3"]);
        }

        it "collates titles rather than comparing bytes" {
            let tasks = vec![
                Task::new("T1", "zebra", "u", "Todo", 0),
                Task::new("T2", "Zeta", "u", "Todo", 0),
                Task::new("T3", "apple", "u", "Todo", 0),
                Task::new("T4", "Éclair", "u", "Todo", 0),
            ];
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::Status, OrderBy::Title));

            assert_eq!(ids(groups.get("Todo").unwrap()), vec!["T3", "T4", "T1", "T2"]);
        }

        it "gives the same result when run twice" {
            let tasks = sample_tasks();
            let options = ViewOptions::new(GroupBy::User, OrderBy::Title);

            assert_eq!(engine.group(&tasks, options), engine.group(&tasks, options));
        }
    }

    describe "derived views" {
        it "lists distinct users and priorities of a group" {
            let tasks = sample_tasks();
            let groups = engine.group(&tasks, ViewOptions::new(GroupBy::Status, OrderBy::Priority));
            let in_progress = groups.get("In Progress").unwrap();

            assert_eq!(distinct_user_ids(in_progress), vec!["usr-2"]);
            assert_eq!(distinct_priorities(in_progress), vec![3, 1]);
        }
    }
}
