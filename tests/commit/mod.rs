mod commit_on_detached_head_moves_only_head;
mod commit_with_empty_index_is_a_no_op;
