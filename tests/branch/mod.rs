mod create_branch_with_invalid_name;
mod create_duplicate_branch;
