mod in_memory_repositories_test;
