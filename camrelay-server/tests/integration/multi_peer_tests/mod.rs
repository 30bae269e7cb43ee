mod test_role_changes;
