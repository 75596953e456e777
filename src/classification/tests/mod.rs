mod coordinator_test;
