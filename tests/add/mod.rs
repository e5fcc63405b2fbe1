mod add_files_from_nested_directories_to_index_successfully;
mod adding_excluded_paths_is_ignored;
mod removing_deleted_files_from_index_successfully;
