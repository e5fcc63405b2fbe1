mod report_deleted_files;
mod report_files_with_modified_contents;
mod status_before_first_commit;
