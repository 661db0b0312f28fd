use crate::artifacts::catalog::{Catalog, CommandEntry, ConceptEntry};

pub const INTRODUCTION: &str = "Git is a distributed version control system that tracks changes in any set of computer files, \
usually used for coordinating work among programmers who are collaboratively developing source code during software development.";

pub static COMMANDS: Catalog<CommandEntry> = phf::phf_ordered_map! {
    "init" => CommandEntry {
        brief: "Initialize a new Git repository.",
        summary: "The 'git init' command initializes a new Git repository.",
        example: "git init",
        outcome: "This command initializes a new Git repository in the current directory.",
    },
    "add" => CommandEntry {
        brief: "Add changes to the staging area.",
        summary: "The 'git add' command adds changes to the staging area.",
        example: "git add file.txt",
        outcome: "This command stages the changes in 'file.txt' for the next commit.",
    },
    "commit" => CommandEntry {
        brief: "Record changes to the repository.",
        summary: "The 'git commit' command records changes to the repository.",
        example: "git commit -m 'Add a new feature'",
        outcome: "This command creates a new commit with a message describing the changes.",
    },
    "status" => CommandEntry {
        brief: "Show the status of changes as untracked, modified, or staged.",
        summary: "The 'git status' command shows the status of changes as untracked, modified, or staged.",
        example: "git status",
        outcome: "This command displays the current state of the working directory and staging area.",
    },
    "branch" => CommandEntry {
        brief: "List, create, or delete branches.",
        summary: "The 'git branch' command lists, creates, or deletes branches.",
        example: "git branch feature-branch",
        outcome: "This command creates a new branch named 'feature-branch'.",
    },
    "merge" => CommandEntry {
        brief: "Merge changes from different branches.",
        summary: "The 'git merge' command merges changes from different branches.",
        example: "git merge feature-branch",
        outcome: "This command merges the changes from 'feature-branch' into the current branch.",
    },
    "pull" => CommandEntry {
        brief: "Fetch from and integrate with another repository or a local branch.",
        summary: "The 'git pull' command fetches from and integrates with another repository or a local branch.",
        example: "git pull origin main",
        outcome: "This command fetches changes from the 'main' branch on the remote repository and merges them into the current branch.",
    },
    "push" => CommandEntry {
        brief: "Update remote refs along with associated objects.",
        summary: "The 'git push' command updates remote refs along with associated objects.",
        example: "git push origin feature-branch",
        outcome: "This command pushes the changes in 'feature-branch' to the remote repository.",
    },
    "log" => CommandEntry {
        brief: "Display commit history.",
        summary: "The 'git log' command displays the commit history of the repository.",
        example: "git log",
        outcome: "This command shows a log of commits, including commit messages and authors.",
    },
    "clone" => CommandEntry {
        brief: "Clone a repository.",
        summary: "The 'git clone' command clones a repository into a new directory.",
        example: "git clone https://github.com/example/repo.git",
        outcome: "This command creates a copy of the specified repository in a new directory.",
    },
    "remote" => CommandEntry {
        brief: "Manage remote repositories.",
        summary: "The 'git remote' command manages remote repositories.",
        example: "git remote add origin https://github.com/example/repo.git",
        outcome: "This command adds a remote named 'origin' for the repository.",
    },
    "fetch" => CommandEntry {
        brief: "Fetch changes from a remote repository without merging.",
        summary: "The 'git fetch' command fetches changes from a remote repository without merging.",
        example: "git fetch origin",
        outcome: "This command retrieves changes from the 'origin' remote repository.",
    },
    "reset" => CommandEntry {
        brief: "Unstage changes or reset the repository to a previous state.",
        summary: "The 'git reset' command unstages changes or resets the repository to a previous state.",
        example: "git reset HEAD file.txt",
        outcome: "This command unstages changes made to 'file.txt'.",
    },
    "tag" => CommandEntry {
        brief: "Create and manage tags for releases.",
        summary: "The 'git tag' command creates and manages tags for releases in the repository.",
        example: "git tag -a v1.0 -m 'Version 1.0'",
        outcome: "This command creates an annotated tag 'v1.0' with a message.",
    },
};

// Example bodies start with a newline: Git examples are separated from
// their heading by a blank line.
pub static CONCEPTS: Catalog<ConceptEntry> = phf::phf_ordered_map! {
    "rebase" => ConceptEntry {
        overview: "Rebase is one of two Git utilities designed to integrate changes from one branch onto another. \
Rebasing is the process of combining or moving a sequence of commits on top of a new base commit. \
Git rebase is the linear process of merging.",
        subject: "Git rebase",
        cheatsheet: "git rebase <base>                   Performs the standard rebase\n\
git rebase <base>                   Performs the standard rebase\n\
git rebase – interactive <base>     Performs the interactive rebase\n\
git rebase -- d                     The commit gets discarded from the final combined commit block during playback.\n\
git rebase -- p                     This leaves the commit alone, not modifying the content or message, and keeping it as an individual commit in the branches’ history.\n\
git rebase -- x                     This executes a command line shell script for each marked commit during playback.\n\
git status                          Checks the rebase status.\n\
git rebase -- continue              Continue with the changes that you made.\n\
git rebase --skip                   skips the changes",
        example: "\nTo rebase development to master the command is like the following\n\
$ git rebase master development",
    },
    "cherry-pick" => ConceptEntry {
        overview: "Cherry-pick is a Git feature that allows you to apply a single commit or a range of commits from one branch to another. \
It's useful when you want to pick specific changes without merging the entire branch.",
        subject: "Git cherry-pick",
        cheatsheet: "git cherry-pick <commit>    Apply the changes introduced by the specified commit\n\
git cherry-pick -x          Create a new commit with the same authorship information as the original commit\n\
git cherry-pick -e          Edit the commit message before applying\n\
git cherry-pick -n          Apply changes but don't commit, allowing further modifications\n\
git cherry-pick -m <parent> Specify the mainline parent for the cherry-pick operation",
        example: "\nTo apply changes from a specific commit:\n\
$ git cherry-pick abc123",
    },
    "submodule" => ConceptEntry {
        overview: "Git Submodules are a way to include external repositories within a Git repository. \
They allow you to keep a reference to an external repository at a specific snapshot, \
making it easy to update the submodule to a newer version later.",
        subject: "Git submodules",
        cheatsheet: "git submodule add <repository> [<path>]    Add a new submodule\n\
git submodule init                        Initialize submodules for the first time after a clone\n\
git submodule update                      Update the submodules to the latest commit",
        example: "\nTo add a submodule:\n\
$ git submodule add https://github.com/example/repo.git path/to/submodule",
    },
    "stash" => ConceptEntry {
        overview: "Git stash is a command used to save changes that haven't been committed to a temporary area \
so that you can switch branches or perform other operations without committing incomplete changes.",
        subject: "Git stash",
        cheatsheet: "git stash                Save your changes to a new stash\n\
git stash list           List all stashes\n\
git stash apply          Apply the changes from the latest stash\n\
git stash pop            Apply and remove the latest stash\n\
git stash drop <stash>   Discard a stash",
        example: "\nTo save changes to a stash:\n\
$ git stash",
    },
    "reflog" => ConceptEntry {
        overview: "Git reflog, short for reference logs, records when the tips of branches and other references were updated in the local repository. \
It provides a way to review and recover previous states of the repository.",
        subject: "Git reflog",
        cheatsheet: "git reflog               Show a log of changes, including those that may not be visible in regular history\n\
git reflog show <branch> Display the reflog for a specific branch",
        example: "\nTo view the reflog for the current branch:\n\
$ git reflog",
    },
    "hooks" => ConceptEntry {
        overview: "Git hooks are scripts that run automatically before or after certain Git commands. \
They allow you to customize and automate processes in your Git workflow.",
        subject: "Git hooks",
        cheatsheet: "No specific Git commands, but hooks are executed automatically based on predefined events.",
        example: "\nImplementing a pre-commit hook to check code formatting:\n\
1. Create a script named pre-commit in the .git/hooks directory.\n\
2. Add code to check code formatting.\n\
3. Make the script executable: chmod +x .git/hooks/pre-commit",
    },
    "gitflow" => ConceptEntry {
        overview: "Gitflow is a branching model for Git that defines a standard set of branches and a consistent workflow. \
It provides a higher-level abstraction of the Git commands to support a successful branching strategy.",
        subject: "Gitflow",
        cheatsheet: "git flow init                Initialize a new repository for Gitflow\n\
git flow feature start      Start a new feature branch\n\
git flow feature finish     Finish a feature branch and merge it into the develop branch\n\
git flow release start      Start a new release branch\n\
git flow release finish     Finish a release branch, merge it into master, and tag the release",
        example: "\nUsing git-flow to start a new feature:\n\
$ git flow feature start new-feature",
    },
    "revert" => ConceptEntry {
        overview: "Git revert is used to create a new commit that undoes the changes made by a previous commit. \
It's a safer way to undo changes compared to Git reset, as it doesn't modify existing commits.",
        subject: "Git revert",
        cheatsheet: "git revert <commit>    Create a new commit that undoes changes introduced by the specified commit",
        example: "\nTo revert the changes made by a specific commit:\n\
$ git revert abc123",
    },
    "filter-branch" => ConceptEntry {
        overview: "Git filter-branch is a complex and powerful command used for rewriting branch history. \
It allows you to filter and modify the branch's commit history based on specific criteria.",
        subject: "Git filter-branch",
        cheatsheet: "git filter-branch <options>    Rewrite the branch history based on specified options",
        example: "\nTo remove a file from the entire commit history:\n\
$ git filter-branch --tree-filter 'rm -f file.txt' -- --all",
    },
    "bisect" => ConceptEntry {
        overview: "Git bisect is a binary search tool used to find a specific commit that introduced a bug or regression. \
It helps narrow down the range of commits where the issue was introduced.",
        subject: "Git bisect",
        cheatsheet: "git bisect start                  Start the bisecting process\n\
git bisect good <commit>          Mark a commit as good (bug-free)\n\
git bisect bad <commit>           Mark a commit as bad (buggy)\n\
git bisect reset                  Finish the bisecting process",
        example: "\nTo start a bisect session:\n\
$ git bisect start",
    },
};
